//! Command handlers grouped by concern.

pub(crate) mod auth;
pub(crate) mod coupons;
pub(crate) mod dine_in;
pub(crate) mod dishes;
pub(crate) mod messages;
pub(crate) mod stats;
pub(crate) mod upload;
