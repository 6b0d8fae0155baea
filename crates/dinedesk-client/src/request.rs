//! Declarative request descriptors.
//!
//! Every remote action is an [`Endpoint`] (verb, path, action label, auth
//! policy, query) plus a [`Payload`]. The dispatcher has a single code path for
//! all of them.

use std::borrow::Cow;

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// How the `Authorization` header is produced for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Always send `Bearer <token>`, `Bearer null` when no token is held.
    Bearer,
    /// Refuse to send the request without a token.
    Required,
    /// Send no `Authorization` header.
    Anonymous,
}

/// One remote action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: Method,
    path: String,
    action: &'static str,
    auth: AuthPolicy,
    query: Vec<(&'static str, String)>,
}

impl Endpoint {
    /// Descriptor for `method` on `path`; `action` labels error messages.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, action: &'static str) -> Self {
        Self {
            method,
            path: path.into(),
            action,
            auth: AuthPolicy::Bearer,
            query: Vec::new(),
        }
    }

    /// `GET` descriptor.
    #[must_use]
    pub fn get(path: impl Into<String>, action: &'static str) -> Self {
        Self::new(Method::GET, path, action)
    }

    /// `POST` descriptor.
    #[must_use]
    pub fn post(path: impl Into<String>, action: &'static str) -> Self {
        Self::new(Method::POST, path, action)
    }

    /// `PUT` descriptor.
    #[must_use]
    pub fn put(path: impl Into<String>, action: &'static str) -> Self {
        Self::new(Method::PUT, path, action)
    }

    /// `PATCH` descriptor.
    #[must_use]
    pub fn patch(path: impl Into<String>, action: &'static str) -> Self {
        Self::new(Method::PATCH, path, action)
    }

    /// `DELETE` descriptor.
    #[must_use]
    pub fn delete(path: impl Into<String>, action: &'static str) -> Self {
        Self::new(Method::DELETE, path, action)
    }

    /// Send the request without an `Authorization` header.
    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.auth = AuthPolicy::Anonymous;
        self
    }

    /// Fail before sending when no token is held.
    #[must_use]
    pub fn requires_token(mut self) -> Self {
        self.auth = AuthPolicy::Required;
        self
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Append a query parameter when `value` is set.
    #[must_use]
    pub fn query_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// HTTP verb.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL, without the query string.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Action label used in error messages.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        self.action
    }

    /// Authorization policy.
    #[must_use]
    pub const fn auth(&self) -> AuthPolicy {
        self.auth
    }

    /// Path followed by the URL-encoded query string, if any.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter().map(|(key, value)| (*key, value.as_str())))
            .finish();
        format!("{}?{encoded}", self.path)
    }
}

/// Percent-encode a value substituted into a path segment.
#[must_use]
pub fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Request body.
#[derive(Debug, Default)]
pub enum Payload {
    /// No body; `Content-Type: application/json` is still sent.
    #[default]
    Empty,
    /// JSON body.
    Json(Value),
    /// Multipart body; the transport sets the content type and boundary.
    Multipart(MultipartPayload),
}

impl Payload {
    /// Serialise `body` as a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when `body` cannot be represented
    /// as JSON.
    pub fn json<T: Serialize + ?Sized>(body: &T) -> ApiResult<Self> {
        serde_json::to_value(body)
            .map(Self::Json)
            .map_err(|err| ApiError::InvalidRequest(format!("body is not valid JSON: {err}")))
    }
}

/// File attached to a multipart payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// File name reported to the server.
    pub file_name: String,
    /// MIME type; the transport default is used when unset.
    pub mime: Option<String>,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl FilePart {
    /// File part without an explicit MIME type.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: None,
            bytes,
        }
    }

    /// Set the MIME type.
    #[must_use]
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

/// Ordered multipart form description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    texts: Vec<(String, String)>,
    files: Vec<(String, FilePart)>,
}

impl MultipartPayload {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.texts.push((name.into(), value.into()));
        self
    }

    /// Append a text field when `value` is set.
    #[must_use]
    pub fn text_opt(self, name: impl Into<String>, value: Option<String>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    /// Append a file field.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, file: FilePart) -> Self {
        self.files.push((name.into(), file));
        self
    }

    pub(crate) fn into_form(self) -> ApiResult<Form> {
        let mut form = Form::new();
        for (name, value) in self.texts {
            form = form.text(name, value);
        }
        for (name, file) in self.files {
            let mut part = Part::bytes(file.bytes).file_name(file.file_name);
            if let Some(mime) = file.mime {
                part = part.mime_str(&mime).map_err(|err| {
                    ApiError::InvalidRequest(format!("invalid MIME type '{mime}': {err}"))
                })?;
            }
            form = form.part(name, part);
        }
        Ok(form)
    }
}
