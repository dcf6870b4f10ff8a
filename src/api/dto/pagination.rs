//! Restaurant listing query parameters.

use serde::Deserialize;
use serde_json::{Map, Value, json};
use serde_with::{DisplayFromStr, serde_as};

use crate::application::services::RestaurantQuery;
use crate::domain::repositories::{SortColumn, SortDirection};
use crate::error::AppError;

pub const DEFAULT_PAGE_NUMBER: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 5;
pub const ALLOWED_PAGE_SIZES: [i64; 3] = [5, 10, 15];

/// Largest page number whose offset still fits in an `i64` at the largest
/// page size.
pub const MAX_PAGE_NUMBER: i64 = i64::MAX / ALLOWED_PAGE_SIZES[2];

/// Query string of `GET /api/restaurant`.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantQueryParams {
    #[serde(default)]
    pub search_phrase: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_number: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<i64>,

    #[serde(default)]
    pub sort_by: Option<String>,

    #[serde(default)]
    pub sort_direction: Option<String>,
}

impl RestaurantQueryParams {
    /// Validates the parameters and converts them to a service query.
    ///
    /// # Defaults
    ///
    /// - `pageNumber`: 1
    /// - `pageSize`: 5
    /// - `sortDirection`: ASC
    ///
    /// # Validation
    ///
    /// - `pageNumber` must be between 1 and [`MAX_PAGE_NUMBER`]
    /// - `pageSize` must be one of 5, 10, 15
    /// - `sortBy` must be empty or one of Name, Description, Category
    /// - `sortDirection` must be ASC or DESC, ignoring case
    ///
    /// Every failing field is reported in the error details.
    pub fn into_query(self) -> Result<RestaurantQuery, AppError> {
        let mut errors = Map::new();

        let page_number = self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER);
        if page_number < 1 {
            errors.insert(
                "pageNumber".to_string(),
                json!(["Page number must be greater than or equal to 1"]),
            );
        } else if page_number > MAX_PAGE_NUMBER {
            errors.insert(
                "pageNumber".to_string(),
                json!([format!(
                    "Page number must be less than or equal to {MAX_PAGE_NUMBER}"
                )]),
            );
        }

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if !ALLOWED_PAGE_SIZES.contains(&page_size) {
            errors.insert(
                "pageSize".to_string(),
                json!([format!("PageSize must be in [{}]", join(&ALLOWED_PAGE_SIZES))]),
            );
        }

        let sort_by = match self.sort_by.as_deref().filter(|s| !s.is_empty()) {
            None => None,
            Some(raw) => match raw.parse::<SortColumn>() {
                Ok(column) => Some(column),
                Err(message) => {
                    errors.insert("sortBy".to_string(), json!([message]));
                    None
                }
            },
        };

        let sort_direction = match self.sort_direction.as_deref() {
            None | Some("") => SortDirection::Asc,
            Some(raw) if raw.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(raw) if raw.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(_) => {
                errors.insert(
                    "sortDirection".to_string(),
                    json!(["Sort direction must be ASC or DESC"]),
                );
                SortDirection::Asc
            }
        };

        if !errors.is_empty() {
            return Err(AppError::bad_request(
                "Validation failed",
                Value::Object(errors),
            ));
        }

        Ok(RestaurantQuery {
            search_phrase: self.search_phrase,
            page_number,
            page_size,
            sort_by,
            sort_direction,
        })
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
