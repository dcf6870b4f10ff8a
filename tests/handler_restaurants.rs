mod common;

use axum::http::{StatusCode, header};
use chrono::{Datelike, Utc};
use common::{TestApp, UserFixture, bearer, new_restaurant};
use restaurant_api::domain::entities::{NewRestaurant, Role};
use restaurant_api::domain::repositories::RestaurantRepository;
use serde_json::{Value, json};

fn restaurant_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Fried chicken",
        "category": "Fast Food",
        "hasDelivery": true,
        "contactEmail": "contact@kfc.com",
        "contactNumber": "555-123-456",
        "city": "Kraków",
        "street": "Długa 5",
        "postalCode": "30-001"
    })
}

#[tokio::test]
async fn test_list_restaurants_valid_pages() {
    let app = TestApp::new();
    app.create_restaurant("KFC", None).await;

    for (number, size) in [(1, 5), (1, 10), (1, 15)] {
        let response = app
            .server
            .get(&format!("/api/restaurant?pageNumber={number}&pageSize={size}"))
            .await;

        response.assert_status_ok();
    }
}

#[tokio::test]
async fn test_list_restaurants_invalid_pages() {
    let app = TestApp::new();

    for (number, size) in [(1, 55), (11, 30), (1, 155), (-1, 155), (0, 0)] {
        let response = app
            .server
            .get(&format!("/api/restaurant?pageNumber={number}&pageSize={size}"))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }
}

#[tokio::test]
async fn test_list_restaurants_reports_every_invalid_parameter() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/api/restaurant?pageNumber=0&pageSize=7&sortBy=ContactEmail&sortDirection=up")
        .await;

    response.assert_status_bad_request();

    let details = &response.json::<Value>()["error"]["details"];
    assert!(details["pageNumber"].is_array());
    assert!(details["pageSize"].is_array());
    assert!(details["sortBy"].is_array());
    assert!(details["sortDirection"].is_array());
}

#[tokio::test]
async fn test_list_restaurants_paging_metadata() {
    let app = TestApp::new();
    for i in 0..12 {
        app.create_restaurant(&format!("Restaurant {i:02}"), None).await;
    }

    let response = app
        .server
        .get("/api/restaurant?pageNumber=3&pageSize=5")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["totalItemsCount"], 12);
    assert_eq!(json["totalPages"], 3);
    assert_eq!(json["itemsFrom"], 11);
    assert_eq!(json["itemsTo"], 15);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_restaurants_search_and_sort() {
    let app = TestApp::new();
    app.create_restaurant("KFC", None).await;
    app.create_restaurant("McDonald Szewska", None).await;
    app.create_restaurant("McDonald Długa", None).await;

    let response = app
        .server
        .get("/api/restaurant?searchPhrase=mcdonald&sortBy=Name&sortDirection=DESC")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["totalItemsCount"], 2);
    let items = json["items"].as_array().unwrap();
    assert_eq!(items[0]["name"], "McDonald Szewska");
    assert_eq!(items[1]["name"], "McDonald Długa");
}

#[tokio::test]
async fn test_list_restaurants_rejects_huge_page_number() {
    let app = TestApp::new();
    app.create_restaurant("KFC", None).await;

    let response = app
        .server
        .get("/api/restaurant?pageNumber=9223372036854775807&pageSize=15")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["pageNumber"].is_array());
}

#[tokio::test]
async fn test_list_restaurants_far_page_is_empty() {
    let app = TestApp::new();
    app.create_restaurant("KFC", None).await;

    let response = app
        .server
        .get("/api/restaurant?pageNumber=1000000&pageSize=15")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["totalItemsCount"], 1);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_restaurants_rejects_non_numeric_page() {
    let app = TestApp::new();

    let response = app.server.get("/api/restaurant?pageNumber=abc").await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["query"].is_array());
}

#[tokio::test]
async fn test_list_restaurants_sorts_missing_values_last() {
    let app = TestApp::new();
    let uncategorized = RestaurantRepository::create(
        app.store.as_ref(),
        NewRestaurant {
            category: None,
            ..new_restaurant("Corner Bistro", None)
        },
    )
    .await
    .unwrap();
    app.create_restaurant("KFC", None).await;

    for direction in ["ASC", "DESC"] {
        let response = app
            .server
            .get(&format!(
                "/api/restaurant?sortBy=Category&sortDirection={direction}"
            ))
            .await;

        response.assert_status_ok();

        let json = response.json::<Value>();
        let items = json["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["id"], uncategorized);
    }
}

#[tokio::test]
async fn test_list_restaurants_is_public() {
    let app = TestApp::new();

    let response = app.server.get("/api/restaurant").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["totalItemsCount"], 0);
}

#[tokio::test]
async fn test_create_restaurant_returns_location() {
    let app = TestApp::new();
    let (owner, token) = app
        .token_for(UserFixture::new("owner@test.com", Role::Manager))
        .await;

    let response = app
        .server
        .post("/api/restaurant")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&restaurant_body("KFC"))
        .await;

    response.assert_status(StatusCode::CREATED);

    let location = response.header(header::LOCATION);
    let location = location.to_str().unwrap();
    assert!(location.starts_with("/api/restaurant/"));

    let id: i64 = location.trim_start_matches("/api/restaurant/").parse().unwrap();
    let stored = app.restaurant(id).await.unwrap();
    assert_eq!(stored.name, "KFC");
    assert_eq!(stored.created_by_id, Some(owner.id));
    assert_eq!(stored.address.unwrap().city, "Kraków");
}

#[tokio::test]
async fn test_create_restaurant_requires_manager_or_admin() {
    let app = TestApp::new();
    let (_, token) = app
        .token_for(UserFixture::new("user@test.com", Role::User))
        .await;

    let response = app
        .server
        .post("/api/restaurant")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&restaurant_body("KFC"))
        .await;

    response.assert_status_forbidden();
}

#[tokio::test]
async fn test_create_restaurant_without_token() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/restaurant")
        .json(&restaurant_body("KFC"))
        .await;

    response.assert_status_unauthorized();
    assert_eq!(response.header(header::WWW_AUTHENTICATE), "Bearer");
}

#[tokio::test]
async fn test_create_restaurant_with_invalid_token() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/restaurant")
        .add_header(header::AUTHORIZATION, bearer("not.a.token"))
        .json(&restaurant_body("KFC"))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_create_restaurant_validation() {
    let app = TestApp::new();
    let (_, token) = app
        .token_for(UserFixture::new("admin@test.com", Role::Admin))
        .await;

    let mut body = restaurant_body("A name that is way too long to be stored");
    body["contactEmail"] = json!("not-an-email");

    let response = app
        .server
        .post("/api/restaurant")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&body)
        .await;

    response.assert_status_bad_request();

    let details = &response.json::<Value>()["error"]["details"];
    assert!(details["name"].is_array());
    assert!(details["contactEmail"].is_array());
}

#[tokio::test]
async fn test_create_restaurant_with_malformed_body() {
    let app = TestApp::new();
    let (_, token) = app
        .token_for(UserFixture::new("admin@test.com", Role::Admin))
        .await;

    let response = app
        .server
        .post("/api/restaurant")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "name": 5 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["body"].is_array());
}

#[tokio::test]
async fn test_create_restaurant_checks_role_before_body() {
    let app = TestApp::new();
    let (_, token) = app
        .token_for(UserFixture::new("user@test.com", Role::User))
        .await;

    let response = app
        .server
        .post("/api/restaurant")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "name": 5 }))
        .await;

    response.assert_status_forbidden();
}

#[tokio::test]
async fn test_get_restaurant_for_adult() {
    let app = TestApp::new();
    let id = app.create_restaurant("KFC", None).await;
    app.create_dish(id, "Nuggets").await;
    let (_, token) = app
        .token_for(UserFixture::new("adult@test.com", Role::User).born(1990, 5, 17))
        .await;

    let response = app
        .server
        .get(&format!("/api/restaurant/{id}"))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "KFC");
    assert_eq!(json["hasDelivery"], true);
    assert_eq!(json["city"], "Kraków");
    assert_eq!(json["dishes"][0]["name"], "Nuggets");
}

#[tokio::test]
async fn test_get_restaurant_forbidden_for_minor() {
    let app = TestApp::new();
    let id = app.create_restaurant("KFC", None).await;
    let year = Utc::now().year() - 10;
    let (_, token) = app
        .token_for(UserFixture::new("young@test.com", Role::User).born(year, 1, 1))
        .await;

    let response = app
        .server
        .get(&format!("/api/restaurant/{id}"))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status_forbidden();
    assert_eq!(
        response.json::<Value>()["error"]["details"]["policy"],
        "AtLeast20"
    );
}

#[tokio::test]
async fn test_get_restaurant_forbidden_without_birth_date() {
    let app = TestApp::new();
    let id = app.create_restaurant("KFC", None).await;
    let (_, token) = app
        .token_for(UserFixture::new("unknown@test.com", Role::User))
        .await;

    let response = app
        .server
        .get(&format!("/api/restaurant/{id}"))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status_forbidden();
}

#[tokio::test]
async fn test_get_restaurant_with_non_numeric_id() {
    let app = TestApp::new();
    let (_, token) = app
        .token_for(UserFixture::new("adult@test.com", Role::User).born(1990, 5, 17))
        .await;

    let response = app
        .server
        .get("/api/restaurant/abc")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["path"].is_array());
}

#[tokio::test]
async fn test_get_restaurant_not_found() {
    let app = TestApp::new();
    let (_, token) = app
        .token_for(UserFixture::new("adult@test.com", Role::User).born(1990, 5, 17))
        .await;

    let response = app
        .server
        .get("/api/restaurant/999")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_update_restaurant_by_owner() {
    let app = TestApp::new();
    let (owner, token) = app
        .token_for(UserFixture::new("owner@test.com", Role::Manager))
        .await;
    let id = app.create_restaurant("KFC", Some(owner.id)).await;

    let response = app
        .server
        .put(&format!("/api/restaurant/{id}"))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "name": "KFC Rynek", "hasDelivery": false }))
        .await;

    response.assert_status_ok();

    let stored = app.restaurant(id).await.unwrap();
    assert_eq!(stored.name, "KFC Rynek");
    assert_eq!(stored.description, None);
    assert!(!stored.has_delivery);
}

#[tokio::test]
async fn test_update_restaurant_by_other_user() {
    let app = TestApp::new();
    let owner = app
        .create_user(UserFixture::new("owner@test.com", Role::Manager))
        .await;
    let (_, token) = app
        .token_for(UserFixture::new("other@test.com", Role::Manager))
        .await;
    let id = app.create_restaurant("KFC", Some(owner.id)).await;

    let response = app
        .server
        .put(&format!("/api/restaurant/{id}"))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "name": "Taken over", "hasDelivery": false }))
        .await;

    response.assert_status_forbidden();
    assert_eq!(app.restaurant(id).await.unwrap().name, "KFC");
}

#[tokio::test]
async fn test_update_missing_restaurant() {
    let app = TestApp::new();
    let (_, token) = app
        .token_for(UserFixture::new("owner@test.com", Role::Manager))
        .await;

    let response = app
        .server
        .put("/api/restaurant/999")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "name": "Nowhere", "hasDelivery": true }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_restaurant_by_owner() {
    let app = TestApp::new();
    let (owner, token) = app
        .token_for(UserFixture::new("owner@test.com", Role::Manager))
        .await;
    let id = app.create_restaurant("KFC", Some(owner.id)).await;
    app.create_dish(id, "Nuggets").await;

    let response = app
        .server
        .delete(&format!("/api/restaurant/{id}"))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(app.restaurant(id).await.is_none());
    assert!(app.dishes_of(id).await.is_empty());
}

#[tokio::test]
async fn test_delete_restaurant_by_other_user() {
    let app = TestApp::new();
    let owner = app
        .create_user(UserFixture::new("owner@test.com", Role::Manager))
        .await;
    let (_, token) = app
        .token_for(UserFixture::new("admin@test.com", Role::Admin))
        .await;
    let id = app.create_restaurant("KFC", Some(owner.id)).await;

    let response = app
        .server
        .delete(&format!("/api/restaurant/{id}"))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status_forbidden();
    assert!(app.restaurant(id).await.is_some());
}

#[tokio::test]
async fn test_delete_missing_restaurant() {
    let app = TestApp::new();
    let (_, token) = app
        .token_for(UserFixture::new("owner@test.com", Role::Manager))
        .await;

    let response = app
        .server
        .delete("/api/restaurant/999")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status_not_found();
}
