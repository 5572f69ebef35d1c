//! Shared query parameter types for API handlers.
//!
//! Raw query strings are deserialized into these structs and then converted
//! into the core filter and page types, so that bad enum codes or sort keys
//! surface as `VALIDATION_ERROR` responses.

use carcatalog_core::error::CoreError;
use carcatalog_core::filter::{parse_color_list, CarFilter};
use carcatalog_core::pagination::PageRequest;
use carcatalog_core::types::DbId;
use carcatalog_core::vehicle::{EngineType, Transmission};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Paging parameters (`?page=&size=&sort=`).
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl PageParams {
    pub fn page_request(&self) -> Result<PageRequest, CoreError> {
        PageRequest::from_params(self.page, self.size, self.sort.as_deref())
            .map_err(CoreError::Validation)
    }
}

/// Query parameters for `GET /admin/cars/filter`.
///
/// Every criterion is optional. Paging fields are repeated here rather than
/// flattened from [`PageParams`] because flattened structs lose numeric
/// parsing in `serde_urlencoded`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarFilterParams {
    pub category_id: Option<DbId>,
    pub supplier_id: Option<DbId>,
    pub transmission: Option<String>,
    pub engine_type: Option<String>,
    /// Comma-separated color codes, e.g. `RED,BLUE`.
    pub car_colors: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_mileage: Option<Decimal>,
    pub max_mileage: Option<Decimal>,
    pub keyword: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl CarFilterParams {
    /// Parse the criteria into a [`CarFilter`]. Empty strings count as absent.
    pub fn to_filter(&self) -> Result<CarFilter, CoreError> {
        let transmission = non_empty(self.transmission.as_deref())
            .map(Transmission::from_str_value)
            .transpose()
            .map_err(CoreError::Validation)?;

        let engine_type = non_empty(self.engine_type.as_deref())
            .map(EngineType::from_str_value)
            .transpose()
            .map_err(CoreError::Validation)?;

        let colors = self
            .car_colors
            .as_deref()
            .map(parse_color_list)
            .transpose()
            .map_err(CoreError::Validation)?;

        Ok(CarFilter {
            category_id: self.category_id,
            supplier_id: self.supplier_id,
            transmission,
            engine_type,
            colors,
            min_price: self.min_price,
            max_price: self.max_price,
            min_mileage: self.min_mileage,
            max_mileage: self.max_mileage,
            keyword: self.keyword.clone(),
        })
    }

    pub fn page_request(&self) -> Result<PageRequest, CoreError> {
        PageRequest::from_params(self.page, self.size, self.sort.as_deref())
            .map_err(CoreError::Validation)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
