//! Car entity model, DTOs and the response projection.

use carcatalog_core::error::CoreError;
use carcatalog_core::projection::{
    color_display_lists, decode_colors, decode_engine_type, decode_transmission, reference_label,
};
use carcatalog_core::types::{DbId, Timestamp};
use carcatalog_core::validation::{non_negative, not_blank};
use carcatalog_core::vehicle::{CarColor, EngineType, Transmission};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A car row joined with the name and deleted flag of its category and
/// supplier.
///
/// The joined columns are optional because the join is a `LEFT JOIN`; a
/// `None` there means the reference is dangling.
#[derive(Debug, Clone, FromRow)]
pub struct CarRow {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub category_id: DbId,
    pub supplier_id: DbId,
    pub price: Decimal,
    pub colors: Vec<String>,
    pub transmission: String,
    pub engine_type: String,
    pub mileage: Option<Decimal>,
    pub manufactured_date: NaiveDate,
    pub image_urls: Vec<String>,
    pub deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub category_name: Option<String>,
    pub category_deleted: Option<bool>,
    pub supplier_name: Option<String>,
    pub supplier_deleted: Option<bool>,
}

/// DTO for creating a new car. Image URLs are produced by the upload step,
/// not supplied by the client.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCar {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub description: Option<String>,
    pub supplier_id: DbId,
    pub category_id: DbId,
    #[validate(custom(function = "non_negative"))]
    pub price: Decimal,
    #[validate(length(min = 1, message = "at least one color is required"))]
    pub car_colors: Vec<CarColor>,
    #[serde(alias = "carTransmission")]
    pub transmission: Transmission,
    pub engine_type: EngineType,
    #[validate(custom(function = "non_negative"))]
    pub mileage: Option<Decimal>,
    pub manufactured_date: NaiveDate,
}

/// DTO for replacing an existing car. Every field is written, including the
/// image URL list.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCar {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub description: Option<String>,
    pub supplier_id: DbId,
    pub category_id: DbId,
    #[validate(custom(function = "non_negative"))]
    pub price: Decimal,
    #[validate(length(min = 1, message = "at least one color is required"))]
    pub car_colors: Vec<CarColor>,
    #[serde(alias = "carTransmission")]
    pub transmission: Transmission,
    pub engine_type: EngineType,
    #[validate(custom(function = "non_negative"))]
    pub mileage: Option<Decimal>,
    pub manufactured_date: NaiveDate,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// The fields that identify a car configuration. Two live records may not
/// share all five.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarConfiguration<'a> {
    pub name: &'a str,
    pub supplier_id: DbId,
    pub transmission: Transmission,
    pub engine_type: EngineType,
    pub category_id: DbId,
}

impl CreateCar {
    pub fn configuration(&self) -> CarConfiguration<'_> {
        CarConfiguration {
            name: &self.name,
            supplier_id: self.supplier_id,
            transmission: self.transmission,
            engine_type: self.engine_type,
            category_id: self.category_id,
        }
    }
}

impl UpdateCar {
    pub fn configuration(&self) -> CarConfiguration<'_> {
        CarConfiguration {
            name: &self.name,
            supplier_id: self.supplier_id,
            transmission: self.transmission,
            engine_type: self.engine_type,
            category_id: self.category_id,
        }
    }
}

/// Stored color codes for a list of colors.
pub fn color_codes(colors: &[CarColor]) -> Vec<String> {
    colors.iter().map(|c| c.as_str().to_string()).collect()
}

/// The external shape of a car.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub category_id: DbId,
    pub category_name: String,
    pub supplier_id: DbId,
    pub supplier_name: String,
    pub price: Decimal,
    pub car_colors: Vec<String>,
    pub color_code: Vec<String>,
    pub transmission: Transmission,
    pub transmission_name: &'static str,
    pub transmission_description: &'static str,
    pub engine_type: EngineType,
    pub engine_name: &'static str,
    pub engine_description: &'static str,
    pub mileage: Option<Decimal>,
    pub image_urls: Vec<String>,
    pub manufactured_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted: bool,
}

impl TryFrom<CarRow> for CarResponse {
    type Error = CoreError;

    fn try_from(row: CarRow) -> Result<Self, Self::Error> {
        let category_name =
            reference_label("category", row.id, row.category_name, row.category_deleted)?;
        let supplier_name =
            reference_label("supplier", row.id, row.supplier_name, row.supplier_deleted)?;

        let colors = decode_colors(row.id, &row.colors)?;
        let (car_colors, color_code) = color_display_lists(&colors);

        let transmission = decode_transmission(row.id, &row.transmission)?;
        let engine_type = decode_engine_type(row.id, &row.engine_type)?;
        let transmission_display = transmission.display();
        let engine_display = engine_type.display();

        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            category_id: row.category_id,
            category_name,
            supplier_id: row.supplier_id,
            supplier_name,
            price: row.price,
            car_colors,
            color_code,
            transmission,
            transmission_name: transmission_display.name,
            transmission_description: transmission_display.description,
            engine_type,
            engine_name: engine_display.name,
            engine_description: engine_display.description,
            mileage: row.mileage,
            image_urls: row.image_urls,
            manufactured_date: row.manufactured_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted: row.deleted,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
