//! Coupon creation form.
//!
//! # Design
//! - Keep inputs as strings for lossless editing; convert only on submit.
//! - Terms are an ordered list edited in place; at least one term is kept.
//! - Submitting closes the modal whether or not the backend accepted it.

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone, Utc};
use dinedesk_api_models::CouponInput;
use dinedesk_client::ApiClient;

use crate::client::{CliError, CliResult};

/// Largest integer a JavaScript number holds exactly; stands for "no limit".
pub(crate) const UNLIMITED_USES: i64 = (1 << 53) - 1;

/// Terms every new coupon starts with.
pub(crate) const DEFAULT_TERMS: [&str; 2] = [
    "20% off up to ₹999 on orders above ₹4000.",
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
];

/// How the discount amount is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum DiscountType {
    /// Percentage of the cart value.
    #[default]
    Percentage,
    /// Flat amount off.
    Amount,
}

impl DiscountType {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Amount => "amount",
        }
    }
}

/// Mutable coupon form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CouponForm {
    pub(crate) code: String,
    pub(crate) one_time_use: bool,
    /// `"unlimited"`, a whole number, or empty.
    pub(crate) total_uses: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub(crate) expiry_date: String,
    pub(crate) discount_type: DiscountType,
    pub(crate) discount_amount: String,
    pub(crate) minimum_cart_value: String,
    terms: Vec<String>,
}

impl Default for CouponForm {
    fn default() -> Self {
        Self {
            code: String::new(),
            one_time_use: true,
            total_uses: String::new(),
            expiry_date: String::new(),
            discount_type: DiscountType::Percentage,
            discount_amount: String::new(),
            minimum_cart_value: String::new(),
            terms: DEFAULT_TERMS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl CouponForm {
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Append an empty term.
    pub(crate) fn add_term(&mut self) {
        self.terms.push(String::new());
    }

    /// Replace term `index`; out-of-range indices are ignored.
    pub(crate) fn edit_term(&mut self, index: usize, value: impl Into<String>) {
        if let Some(term) = self.terms.get_mut(index) {
            *term = value.into();
        }
    }

    /// Delete term `index`. Returns `false` when nothing was removed, either
    /// because the index is out of range or because it is the last term.
    pub(crate) fn remove_term(&mut self, index: usize) -> bool {
        if !self.can_remove_terms() || index >= self.terms.len() {
            return false;
        }
        self.terms.remove(index);
        true
    }

    /// Whether removal controls should be offered.
    pub(crate) fn can_remove_terms(&self) -> bool {
        self.terms.len() > 1
    }

    /// Replace the term list with `terms`, reusing the edit operations.
    /// An empty slice keeps the current terms.
    pub(crate) fn set_terms(&mut self, terms: &[String]) {
        if terms.is_empty() {
            return;
        }
        for (index, term) in terms.iter().enumerate() {
            if index >= self.terms.len() {
                self.add_term();
            }
            self.edit_term(index, term.clone());
        }
        while self.terms.len() > terms.len() {
            if !self.remove_term(self.terms.len() - 1) {
                break;
            }
        }
    }

    /// Assemble the request body.
    ///
    /// # Errors
    /// Returns an error when the uses field or the expiry date cannot be parsed.
    pub(crate) fn to_payload(&self) -> Result<CouponInput, String> {
        let no_of_uses = parse_uses(&self.total_uses)?;
        let expires_on = parse_expiry(&self.expiry_date)?;
        let terms = serde_json::to_string(&self.terms)
            .map_err(|err| format!("failed to encode terms: {err}"))?;

        let meta_data = BTreeMap::from([
            (
                "discountType".to_string(),
                self.discount_type.as_str().to_string(),
            ),
            ("discountAmount".to_string(), self.discount_amount.clone()),
            (
                "minimumCartValue".to_string(),
                self.minimum_cart_value.clone(),
            ),
            ("terms".to_string(), terms),
        ]);

        Ok(CouponInput {
            code: self.code.clone(),
            is_one_time: self.one_time_use,
            expires_on,
            no_of_uses,
            meta_data,
        })
    }
}

fn parse_uses(value: &str) -> Result<i64, String> {
    let trimmed = value.trim();
    if trimmed == "unlimited" {
        return Ok(UNLIMITED_USES);
    }
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| format!("total uses must be a whole number or 'unlimited', got '{trimmed}'"))
}

fn parse_expiry(value: &str) -> Result<chrono::DateTime<Utc>, String> {
    let trimmed = value.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| format!("expiry must be a date in YYYY-MM-DD form, got '{trimmed}'"))?;
    Ok(Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)))
}

/// The coupon form hosted in a dismissible dialog.
#[derive(Clone, Debug, Default)]
pub(crate) struct CouponModal {
    pub(crate) form: CouponForm,
    open: bool,
}

impl CouponModal {
    /// Open the dialog with a fresh form.
    pub(crate) fn open() -> Self {
        Self {
            form: CouponForm::default(),
            open: true,
        }
    }

    pub(crate) const fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    /// Create the coupon, then close the dialog regardless of the outcome.
    /// The outcome is handed back untouched.
    pub(crate) async fn submit(&mut self, api: &ApiClient) -> CliResult<String> {
        let result = match self.form.to_payload() {
            Ok(payload) => api
                .create_coupon(&payload)
                .await
                .map_err(CliError::from),
            Err(message) => Err(CliError::validation(message)),
        };
        self.close();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinedesk_client::{ClientConfig, Session};
    use httpmock::prelude::*;
    use serde_json::json;

    fn filled_form() -> CouponForm {
        CouponForm {
            code: "WELCOME".to_string(),
            total_uses: "5".to_string(),
            expiry_date: "2025-01-31".to_string(),
            discount_amount: "20".to_string(),
            minimum_cart_value: "4000".to_string(),
            ..CouponForm::default()
        }
    }

    #[test]
    fn unlimited_uses_maps_to_max_safe_integer() {
        let form = CouponForm {
            total_uses: "unlimited".to_string(),
            ..filled_form()
        };
        let payload = form.to_payload().expect("payload builds");
        assert_eq!(payload.no_of_uses, 9_007_199_254_740_991);
    }

    #[test]
    fn numeric_and_empty_uses() {
        assert_eq!(filled_form().to_payload().expect("payload").no_of_uses, 5);
        let form = CouponForm {
            total_uses: String::new(),
            ..filled_form()
        };
        assert_eq!(form.to_payload().expect("payload").no_of_uses, 0);
        let form = CouponForm {
            total_uses: "lots".to_string(),
            ..filled_form()
        };
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn payload_carries_metadata_and_midnight_expiry() {
        let payload = filled_form().to_payload().expect("payload builds");
        assert_eq!(payload.code, "WELCOME");
        assert!(payload.is_one_time);
        assert_eq!(
            payload.expires_on,
            Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap()
        );
        assert_eq!(payload.meta_data["discountType"], "percentage");
        assert_eq!(payload.meta_data["discountAmount"], "20");
        assert_eq!(payload.meta_data["minimumCartValue"], "4000");
        let terms: Vec<String> =
            serde_json::from_str(&payload.meta_data["terms"]).expect("terms are JSON");
        assert_eq!(terms, DEFAULT_TERMS);
    }

    #[test]
    fn missing_expiry_is_rejected() {
        let form = CouponForm {
            expiry_date: String::new(),
            ..filled_form()
        };
        assert!(form.to_payload().unwrap_err().contains("YYYY-MM-DD"));
    }

    #[test]
    fn add_term_appends_empty_entry() {
        let mut form = CouponForm::default();
        form.add_term();
        assert_eq!(form.terms().len(), 3);
        assert_eq!(form.terms()[2], "");
    }

    #[test]
    fn remove_term_deletes_exactly_one_entry_in_order() {
        let mut form = CouponForm::default();
        form.add_term();
        form.edit_term(2, "third");
        assert!(form.remove_term(1));
        assert_eq!(form.terms(), [DEFAULT_TERMS[0].to_string(), "third".to_string()]);
    }

    #[test]
    fn last_term_cannot_be_removed() {
        let mut form = CouponForm::default();
        assert!(form.remove_term(0));
        assert!(!form.can_remove_terms());
        assert!(!form.remove_term(0));
        assert_eq!(form.terms().len(), 1);
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let mut form = CouponForm::default();
        form.edit_term(9, "nope");
        assert!(!form.remove_term(9));
        assert_eq!(form.terms(), DEFAULT_TERMS);
    }

    #[test]
    fn set_terms_grows_and_shrinks_the_list() {
        let mut form = CouponForm::default();
        form.set_terms(&["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(form.terms(), ["a", "b", "c"]);
        form.set_terms(&["only".to_string()]);
        assert_eq!(form.terms(), ["only"]);
        form.set_terms(&[]);
        assert_eq!(form.terms(), ["only"]);
    }

    #[tokio::test]
    async fn submit_closes_modal_even_when_request_fails() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/coupon");
            then.status(500);
        });
        let api = ApiClient::new(
            ClientConfig::new(&server.base_url()).expect("valid URL"),
            Session::new(Some("token".to_string())),
        )
        .expect("client");

        let mut modal = CouponModal::open();
        modal.form = filled_form();
        let result = modal.submit(&api).await;

        assert!(!modal.is_open());
        let err = result.expect_err("500 surfaces to the caller");
        assert!(
            err.display_message()
                .contains("Failed to create coupon: 500 Internal Server Error")
        );
        mock.assert();
    }

    #[tokio::test]
    async fn submit_returns_created_id() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/coupon");
            then.status(201).json_body(json!({"id": "c-1"}));
        });
        let api = ApiClient::new(
            ClientConfig::new(&server.base_url()).expect("valid URL"),
            Session::new(Some("token".to_string())),
        )
        .expect("client");

        let mut modal = CouponModal::open();
        modal.form = filled_form();
        assert_eq!(modal.submit(&api).await.expect("created"), "c-1");
        assert!(!modal.is_open());
    }
}
