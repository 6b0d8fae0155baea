//! Request bodies sent by the dispatcher.
//!
//! Optional fields are omitted from the JSON when unset, matching the
//! "partial update" semantics of the PATCH/PUT endpoints.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::MetaData;

/// OTP login request for a phone number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Dialling prefix.
    pub country_code: String,
    /// Phone number without prefix.
    pub phone_number: String,
}

/// OTP verification request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyAccessRequest {
    /// Dialling prefix.
    pub country_code: String,
    /// Phone number without prefix.
    pub phone_number: String,
    /// One-time password received by SMS.
    pub otp: String,
}

/// Create/update body for a dish category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DishCategoryInput {
    /// Display name.
    pub name: String,
    /// Picture URL.
    pub picture: String,
}

/// Create/update body for a dish.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DishInput {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Picture URL.
    pub picture: String,
    /// Owning dish category.
    pub dish_category_id: String,
    /// Whether the dish can be ordered.
    pub is_available: bool,
    /// Non-vegetarian marker.
    pub is_non_veg: bool,
    /// Metadata bag.
    pub meta_data: MetaData,
}

/// Body for creating a table booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBooking {
    /// Table to book.
    pub table_id: String,
    /// Calendar date.
    pub booking_date: String,
    /// Time the booking is placed.
    pub booking_time: String,
    /// Start of the reserved window.
    pub from_time: String,
    /// End of the reserved window.
    pub to_time: String,
    /// Party size.
    pub number_of_people: u32,
}

/// Partial booking replacement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Table to move the booking to.
    pub table_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// New date.
    pub booking_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// New booking time.
    pub booking_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// New window start.
    pub from_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// New window end.
    pub to_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// New party size.
    pub number_of_people: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// New status.
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement metadata bag.
    pub meta_data: Option<MetaData>,
}

/// Partial order update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement dish.
    pub dish_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement quantity; zero asks the backend to drop the order line.
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement status.
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement metadata bag.
    pub meta_data: Option<MetaData>,
}

/// Body for opening a checkout on a booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCheckout {
    /// Booking to settle.
    pub booking_id: String,
}

/// Partial checkout update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement bill total.
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement payment status.
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement metadata bag.
    pub meta_data: Option<MetaData>,
}

/// Time window used to query free tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    /// Window start.
    pub from_time: String,
    /// Window end.
    pub to_time: String,
}

/// Metadata stored on a newly created table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableMetadata {
    /// Table status (`available`, `occupied`, `reserved`, `cleaning`, ...).
    pub status: String,
    /// QR code payload printed on the table.
    pub qr_code: String,
}

/// Body for creating a table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTable {
    /// Human-facing table number.
    pub table_number: String,
    /// Seats at the table.
    pub capacity: u32,
    /// Initial metadata.
    pub meta_data: TableMetadata,
}

/// Body for updating a table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableUpdate {
    /// Human-facing table number.
    pub table_number: String,
    /// Seats at the table.
    pub capacity: u32,
    /// Replacement metadata bag.
    pub meta_data: MetaData,
}

/// Body for creating a review of a dish or a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Reviewed product.
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Reviewed dish.
    pub dish_id: Option<String>,
    /// Rating value.
    pub rating: f64,
    /// Free-text comment.
    pub comment: String,
    /// Metadata bag.
    pub meta_data: MetaData,
}

/// Partial review update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement rating.
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement comment.
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement metadata bag.
    pub meta_data: Option<MetaData>,
}

/// Body for creating a staff account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewEmployee {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Dialling prefix.
    pub country_code: String,
    /// Phone number.
    pub phone_number: String,
    /// Avatar URL.
    pub profile_picture: String,
    /// Role label.
    pub role: String,
}

/// Partial staff account update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement given name.
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement family name.
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement avatar URL.
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement role label.
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement phone number.
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replacement email address.
    pub email: Option<String>,
}

/// Create/update body for a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryInput {
    /// Display name.
    pub name: String,
    /// Image URLs.
    pub image_url: Vec<String>,
}

/// Create/update body for a sub-category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubCategoryInput {
    /// Display name.
    pub name: String,
    /// Parent category.
    pub category_id: String,
    /// Image URLs.
    pub image_url: Vec<String>,
}

/// Body for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Long description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Image URLs.
    pub image_url: Vec<String>,
    /// Owning category.
    pub category_id: String,
    /// Owning sub-category.
    pub subcategory_id: String,
    /// Metadata bag.
    pub meta_data: BTreeMap<String, String>,
    /// Whether the product is listed.
    pub is_active: bool,
    /// Units in stock.
    pub availability_count: i64,
}

/// Free-form product patch; any subset of product fields.
pub type ProductPatch = serde_json::Map<String, Value>;

/// Optional category filters for product queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Restrict to a category.
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Restrict to a sub-category.
    pub subcategory_id: Option<String>,
}

/// Page selector passed straight through to the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

/// Body for batch product lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductIds {
    /// Product identifiers to fetch.
    pub ids: Vec<String>,
}

/// Create/update body for a coupon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CouponInput {
    /// Code customers type at checkout.
    pub code: String,
    /// Whether each user may redeem the coupon once.
    pub is_one_time: bool,
    #[serde(with = "js_date")]
    /// Expiry instant.
    pub expires_on: DateTime<Utc>,
    /// Total redemptions allowed.
    pub no_of_uses: i64,
    /// Metadata bag.
    pub meta_data: BTreeMap<String, String>,
}

/// Create/update body for a sale; unset fields are omitted.
pub type SaleInput = crate::Sale;

/// Read-marker update for a contact message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadStatus {
    /// New read marker.
    pub is_read: bool,
}

/// Serialises instants the way a browser `Date` does in JSON:
/// RFC 3339, UTC, millisecond precision, `Z` suffix.
mod js_date {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn coupon_expiry_serialises_like_a_browser_date() {
        let input = CouponInput {
            code: "SPRING".into(),
            is_one_time: false,
            expires_on: Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap(),
            no_of_uses: 5,
            meta_data: BTreeMap::new(),
        };
        let encoded = serde_json::to_value(&input).expect("encode");
        assert_eq!(encoded["expires_on"], json!("2025-01-31T00:00:00.000Z"));
    }

    #[test]
    fn patches_omit_unset_fields() {
        let patch = ReviewPatch {
            rating: Some(4.0),
            ..ReviewPatch::default()
        };
        assert_eq!(serde_json::to_value(&patch).expect("encode"), json!({"rating": 4.0}));

        let filter = ProductFilter::default();
        assert_eq!(serde_json::to_value(&filter).expect("encode"), json!({}));
    }
}
