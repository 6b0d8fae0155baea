#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Dinedesk admin API.
//!
//! Entities mirror the backend's JSON one-to-one; the client never reshapes
//! them. Decoding goes through these types, so a response that does not match
//! its declared shape is rejected at the call site instead of surfacing later
//! as a missing field.
//!
//! Layout:
//! - entities returned by the backend (`User`, `Dish`, `Coupon`, ...)
//! - response wrappers (`Envelope`, `Acknowledgement`, `CreatedId`, ...)
//! - [`requests`]: request bodies sent by the dispatcher

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod requests;

pub use requests::*;

/// Open-ended key/value bag attached to several entities.
pub type MetaData = Value;

// ----------------------------------------------------------------------------
// Response wrappers
// ----------------------------------------------------------------------------

/// `{ success, message?, data }` wrapper used by the dine-in, review, and
/// staff endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    /// Backend-reported outcome flag.
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional human-readable message.
    pub message: Option<String>,
    /// Wrapped payload.
    pub data: T,
}

/// `{ success, message? }` acknowledgement for state transitions and deletes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Acknowledgement {
    /// Backend-reported outcome flag.
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional human-readable message.
    pub message: Option<String>,
}

/// `{ message }` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Message returned by the backend.
    pub message: String,
}

/// `{ id }` returned by creation endpoints that only echo the new identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedId {
    /// Identifier assigned by the backend.
    pub id: String,
}

/// `{ count }` returned by the product count endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCount {
    /// Number of matching products.
    pub count: u64,
}

/// `{ url }` returned by the upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedFile {
    /// Public URL of the stored file.
    pub url: String,
}

/// Average rating aggregate for a dish or product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AverageRating {
    /// Mean rating across all reviews.
    pub average_rating: f64,
}

/// `{ rows }` listing of contact messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessageList {
    /// Messages in backend order.
    pub rows: Vec<ContactMessage>,
}

/// One page of reservations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationPage {
    /// Reservations on this page.
    pub reservations: Vec<Reservation>,
    /// Total number of reservations across all pages.
    pub total: u64,
}

/// Row container used by the admin user listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rows<T> {
    /// Returned rows.
    pub rows: Vec<T>,
}

/// Admin user listing payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUserPage {
    /// Users wrapped in a row container.
    pub users: Rows<User>,
    /// Total number of users.
    pub total: u64,
}

/// Result of an employee create/update call; `data` is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffMutation {
    /// Backend-reported outcome flag.
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional human-readable message.
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Affected staff record, when echoed back.
    pub data: Option<StaffMember>,
}

/// Credentials issued after OTP verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessGrant {
    /// Bearer token for subsequent calls.
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Refresh token, when the backend issues one.
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Authenticated user profile, when included.
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional human-readable message.
    pub message: Option<String>,
}

/// Aggregate dashboard figures. The backend owns the set of metrics, so they
/// are kept as a JSON object keyed by metric name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AdminStats(pub serde_json::Map<String, Value>);

impl AdminStats {
    /// Look up a single metric by name.
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

// ----------------------------------------------------------------------------
// Entities
// ----------------------------------------------------------------------------

/// Authenticated user or customer profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Identifier.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Given name.
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Family name.
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Email address.
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Dialling prefix, e.g. `+91`.
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Phone number without prefix.
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Avatar URL.
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Role label (`admin`, `staff`, `user`, ...).
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Metadata bag.
    pub meta_data: Option<MetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Space-joined first and last name, skipping missing parts.
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Dish menu category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DishCategory {
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Picture URL.
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Dine-in menu item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Picture URL.
    pub picture: Option<String>,
    /// Owning dish category.
    pub dish_category_id: String,
    /// Whether the dish can currently be ordered.
    pub is_available: bool,
    /// Non-vegetarian marker.
    pub is_non_veg: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Metadata bag.
    pub meta_data: Option<MetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Restaurant table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DineInTable {
    /// Identifier.
    pub id: String,
    /// Human-facing table number.
    pub table_number: String,
    /// Seats at the table.
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Metadata bag (status, QR code, ...).
    pub meta_data: Option<MetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl DineInTable {
    /// Table status stored in the metadata bag, when present.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.meta_data
            .as_ref()
            .and_then(|meta| meta.get("status"))
            .and_then(Value::as_str)
    }
}

/// Table booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DineInTableBooking {
    /// Identifier.
    pub id: String,
    /// Booked table.
    pub table_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Booking customer.
    pub user_id: Option<String>,
    /// Calendar date of the booking.
    pub booking_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Time the booking was placed.
    pub booking_time: Option<String>,
    /// Start of the reserved window.
    pub from_time: String,
    /// End of the reserved window.
    pub to_time: String,
    /// Party size.
    pub number_of_people: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Lifecycle status (`pending`, `cancelled`, `completed`, ...).
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Metadata bag.
    pub meta_data: Option<MetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Dine-in order. Also used as the body of `create_order`, so every field the
/// backend assigns is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DineInOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Identifier (assigned by the backend).
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Booking the order belongs to.
    pub booking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Table the order was placed from.
    pub table_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Ordering customer.
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Ordered dish.
    pub dish_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Ordered quantity.
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Kitchen status (`pending`, `preparing`, `ready`, `served`, `cancelled`).
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Metadata bag.
    pub meta_data: Option<MetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Checkout (bill) for a booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DineInCheckout {
    /// Identifier.
    pub id: String,
    /// Booking being settled.
    pub booking_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Paying customer.
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Table being settled.
    pub table_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Bill total.
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Payment status.
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Metadata bag.
    pub meta_data: Option<MetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reservation row in the paginated reservations listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    /// Identifier.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Reserved table.
    pub table_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Reserved table number.
    pub table_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Reserving customer.
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Reservation date.
    pub booking_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Start of the reserved window.
    pub from_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// End of the reserved window.
    pub to_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Party size.
    pub number_of_people: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Lifecycle status.
    pub status: Option<String>,
}

/// Per-table occupancy statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableStats {
    /// Table identifier.
    pub table_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Table number.
    pub table_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Current status.
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Bookings counted for the table.
    pub total_bookings: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Orders counted for the table.
    pub total_orders: Option<u64>,
}

/// Dish or product review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Identifier.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Author.
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Reviewed product.
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Reviewed dish.
    pub dish_id: Option<String>,
    /// Rating value.
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Free-text comment.
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Metadata bag.
    pub meta_data: Option<MetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Assistance request raised from a table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assistance {
    /// Identifier.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Requesting table.
    pub table_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Related booking.
    pub booking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Requesting customer.
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Request text.
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// Storefront banner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Banner {
    /// Identifier.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Banner title.
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Banner description.
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Image URL.
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Click-through target.
    pub redirect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// E-commerce category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    /// Image URLs.
    pub image_url: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// E-commerce sub-category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubCategory {
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Parent category.
    pub category_id: String,
    #[serde(default)]
    /// Image URLs.
    pub image_url: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// E-commerce product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    /// Long description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    #[serde(default)]
    /// Image URLs.
    pub image_url: Vec<String>,
    /// Owning category.
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Owning sub-category.
    pub subcategory_id: Option<String>,
    #[serde(default)]
    /// Metadata bag.
    pub meta_data: BTreeMap<String, String>,
    /// Whether the product is listed.
    pub is_active: bool,
    /// Units in stock.
    pub availability_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Discount coupon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    /// Identifier.
    pub id: String,
    /// Code customers type at checkout.
    pub code: String,
    /// Whether each user may redeem the coupon once.
    pub is_one_time: bool,
    /// Expiry instant.
    pub expires_on: DateTime<Utc>,
    /// Total redemptions allowed.
    pub no_of_uses: i64,
    #[serde(default)]
    /// Metadata bag (discount type, amount, minimum cart value, terms).
    pub meta_data: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Coupon {
    /// Decode the `terms` metadata entry, which is stored as a JSON string.
    ///
    /// Returns an empty list when the entry is missing or malformed.
    #[must_use]
    pub fn terms(&self) -> Vec<String> {
        self.meta_data
            .get("terms")
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }
}

/// Sale campaign.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Identifier.
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Campaign name.
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Scope of the sale (`category`, `subcategory`, `product`, ...).
    pub sale_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Identifier of the scoped entity.
    pub target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Discount value.
    pub discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Campaign start.
    pub starts_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Campaign end.
    pub ends_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Metadata bag.
    pub meta_data: Option<MetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    /// Identifier.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Sender name.
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Sender email.
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Sender phone number.
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Subject line.
    pub subject: Option<String>,
    /// Message body.
    pub message: String,
    #[serde(default)]
    /// Read marker.
    pub is_read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// Staff account managed from the admin area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffMember {
    /// Identifier.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Email address.
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Dialling prefix.
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Phone number.
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Avatar URL.
    pub profile_picture: Option<String>,
    /// Role label.
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}
