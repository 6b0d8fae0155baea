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
#![allow(clippy::missing_errors_doc, clippy::redundant_pub_crate)]
//! Typed REST client for the Dinedesk admin API.
//!
//! Layout:
//! - [`session`]: bearer-token session, its holder, and persisted token stores
//! - [`request`]: declarative [`Endpoint`] / [`Payload`] descriptors
//! - [`client`]: the [`ApiClient`] dispatcher shared by every action
//! - `api`: one method per remote action, grouped by resource
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use dinedesk_client::{ApiClient, ClientConfig, SessionHolder};
//!
//! let holder = SessionHolder::without_store();
//! let client = ApiClient::new(ClientConfig::from_env()?, holder.get_instance())?;
//! let coupons = client.get_coupons().await?;
//! println!("{} coupons", coupons.len());
//! # Ok(())
//! # }
//! ```

mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod session;

pub use api::media::BannerUpload;
pub use client::ApiClient;
pub use config::{API_URL_ENV, ClientConfig};
pub use error::{ApiError, ApiResult, ConfigError, StoreError};
pub use request::{AuthPolicy, Endpoint, FilePart, MultipartPayload, Payload};
pub use session::{
    ACCESS_TOKEN_KEY, FileTokenStore, MemoryTokenStore, Session, SessionHolder, TokenStore,
};

pub use dinedesk_api_models as models;
