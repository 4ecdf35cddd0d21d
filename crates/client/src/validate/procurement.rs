//! Procurement registration forms.
//!
//! Field rules for the inventory/procurement domain: client registration,
//! poultry purchases with line items, and distribution zones. These are
//! rule definitions only; evaluation is delegated to the `validator`
//! derive and surfaced through [`crate::validate::validate_form`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::de;

/// Client pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClientKind {
    /// Wholesale ("MAY")
    #[serde(rename = "MAY")]
    Wholesale,

    /// Retail ("MIN"), the default tier
    #[default]
    #[serde(rename = "MIN")]
    Retail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

/// Client registration form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClientRegistration {
    /// Distribution zone the client belongs to
    pub zone_id: Uuid,

    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub first_name: String,

    #[validate(length(max = 50, message = "cannot exceed 50 characters"))]
    pub paternal_surname: String,

    #[validate(length(max = 50, message = "cannot exceed 50 characters"))]
    pub maternal_surname: Option<String>,

    #[validate(length(max = 20, message = "cannot exceed 20 characters"))]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    #[validate(length(max = 1000, message = "cannot exceed 1000 characters"))]
    pub address: Option<String>,

    /// Loyalty points balance
    pub points: Option<i64>,

    #[validate(
        email(message = "email format is invalid"),
        length(max = 100, message = "email cannot exceed 100 characters")
    )]
    pub email: Option<String>,

    #[serde(default)]
    pub kind: ClientKind,

    pub birth_date: NaiveDate,

    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub gender: Option<Gender>,
}

/// One product line within a poultry purchase.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PurchaseLine {
    pub product_id: Uuid,

    #[serde(deserialize_with = "de::coerce_f64")]
    #[validate(range(min = 0.0, message = "box count cannot be negative"))]
    pub box_count: f64,

    #[serde(deserialize_with = "de::coerce_f64")]
    #[validate(range(exclusive_min = 0.0, message = "gross weight must be positive"))]
    pub gross_weight: f64,

    /// Weight of the empty boxes, subtracted from the gross weight
    #[serde(deserialize_with = "de::coerce_f64")]
    #[validate(range(min = 0.0, message = "tare weight cannot be negative"))]
    pub tare_weight: f64,

    #[serde(deserialize_with = "de::coerce_u32")]
    #[validate(range(min = 1, message = "unit count must be a positive integer"))]
    pub unit_count: u32,

    #[serde(deserialize_with = "de::coerce_f64")]
    #[validate(range(exclusive_min = 0.0, message = "unit cost must be positive"))]
    pub unit_cost: f64,
}

/// Poultry purchase registration form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PoultryPurchase {
    pub supplier_id: Uuid,
    pub driver_id: Uuid,
    pub helper_id: Option<Uuid>,

    pub purchase_date: NaiveDate,

    #[serde(deserialize_with = "de::coerce_f64")]
    #[validate(range(exclusive_min = 0.0, message = "price per kilogram must be positive"))]
    pub price_per_kg: f64,

    #[serde(deserialize_with = "de::coerce_f64")]
    #[validate(range(min = 0.0, message = "amount paid cannot be negative"))]
    pub amount_paid: f64,

    #[validate(
        length(min = 1, message = "at least one purchase line is required"),
        nested
    )]
    pub lines: Vec<PurchaseLine>,
}

/// Distribution zone registration form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ZoneRegistration {
    #[validate(length(min = 3, message = "zone name is required"))]
    pub name: String,

    pub province: Option<String>,
}
