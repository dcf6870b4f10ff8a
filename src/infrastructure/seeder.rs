//! Demo data seeding for fresh databases.

use crate::domain::entities::{NewAddress, NewDish, NewRestaurant};
use crate::domain::repositories::{DishRepository, RestaurantFilter, RestaurantRepository};
use crate::error::AppError;

struct DemoDish {
    name: &'static str,
    price: f64,
}

struct DemoRestaurant {
    name: &'static str,
    category: &'static str,
    description: &'static str,
    contact_email: &'static str,
    has_delivery: bool,
    city: &'static str,
    street: &'static str,
    postal_code: &'static str,
    dishes: &'static [DemoDish],
}

const DEMO_RESTAURANTS: &[DemoRestaurant] = &[
    DemoRestaurant {
        name: "KFC",
        category: "Fast Food",
        description: "KFC is an American fast food restaurant chain specializing in fried chicken.",
        contact_email: "contact@kfc.com",
        has_delivery: true,
        city: "Kraków",
        street: "Długa 5",
        postal_code: "30-001",
        dishes: &[
            DemoDish {
                name: "Nashville Hot Chicken",
                price: 10.30,
            },
            DemoDish {
                name: "Chicken Nuggets",
                price: 5.30,
            },
        ],
    },
    DemoRestaurant {
        name: "McDonald Szewska",
        category: "Fast Food",
        description: "McDonald's Corporation is an American multinational fast food chain.",
        contact_email: "contact@mcdonald.com",
        has_delivery: true,
        city: "Kraków",
        street: "Szewska 2",
        postal_code: "30-001",
        dishes: &[],
    },
];

/// Inserts the demo restaurants when the restaurant table is empty.
///
/// Returns the number of restaurants inserted (zero when data already exists).
///
/// # Errors
///
/// Returns [`AppError::Internal`] on database errors.
pub async fn seed_demo_data<R, D>(restaurants: &R, dishes: &D) -> Result<usize, AppError>
where
    R: RestaurantRepository + ?Sized,
    D: DishRepository + ?Sized,
{
    if restaurants.count(RestaurantFilter::new(0, 1)).await? > 0 {
        tracing::debug!("Restaurants present, skipping demo seed");
        return Ok(0);
    }

    for demo in DEMO_RESTAURANTS {
        let restaurant_id = restaurants
            .create(NewRestaurant {
                name: demo.name.to_string(),
                description: Some(demo.description.to_string()),
                category: Some(demo.category.to_string()),
                has_delivery: demo.has_delivery,
                contact_email: Some(demo.contact_email.to_string()),
                contact_number: None,
                created_by_id: None,
                address: NewAddress {
                    city: demo.city.to_string(),
                    street: demo.street.to_string(),
                    postal_code: Some(demo.postal_code.to_string()),
                },
            })
            .await?;

        for dish in demo.dishes {
            dishes
                .create(NewDish {
                    name: dish.name.to_string(),
                    description: None,
                    price: dish.price,
                    restaurant_id,
                })
                .await?;
        }
    }

    tracing::info!(count = DEMO_RESTAURANTS.len(), "Seeded demo restaurants");
    Ok(DEMO_RESTAURANTS.len())
}
