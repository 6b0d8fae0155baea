//! Remote actions, one `impl ApiClient` block per resource group.
//!
//! Every method is a thin declaration: it names the [`Endpoint`] and
//! [`Payload`] and hands them to the dispatcher.
//!
//! [`Endpoint`]: crate::request::Endpoint
//! [`Payload`]: crate::request::Payload

pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod catalog;
pub(crate) mod coupons;
pub(crate) mod dine_in;
pub(crate) mod dishes;
pub(crate) mod media;
pub(crate) mod messages;
pub(crate) mod reviews;
pub(crate) mod sales;
