/*
[INPUT]:  Method, resource, form payload, auth flag, base URL and credentials
[OUTPUT]: PendingRequest (resolved URL, encoded form body, headers)
[POS]:    HTTP layer - outbound request assembly and signing
[UPDATE]: When the form contract or authentication headers change
*/

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use url::form_urlencoded;

use crate::http::{FybError, RequestSigner, Result};

/// Form fields keyed by name. Keys are unique and encoded in sorted order.
pub type Form = BTreeMap<String, String>;

const TIMESTAMP_FIELD: &str = "timestamp";
const KEY_HEADER: &str = "key";
const SIG_HEADER: &str = "sig";

/// Source of the `timestamp` injected into signed forms
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current Unix time in whole seconds
    fn unix_timestamp(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Clock frozen at a given Unix timestamp
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_timestamp(&self) -> i64 {
        self.0
    }
}

/// A fully assembled request, valid for one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub method: Method,
    pub url: Url,
    pub form: Form,
    /// URL-encoded `form`; both the HTTP body and the signature input
    pub body: String,
    pub headers: HeaderMap,
}

/// Assembles outbound requests against one base URL
#[derive(Clone)]
pub struct RequestBuilder {
    base_url: String,
    api_key: String,
    signer: Option<RequestSigner>,
    clock: Arc<dyn Clock>,
}

impl RequestBuilder {
    /// Create a builder; the base URL must parse as an absolute URL.
    pub fn new(
        base_url: &str,
        api_key: &str,
        api_secret: &str,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        Url::parse(base_url)?;
        let signer = (!api_secret.is_empty()).then(|| RequestSigner::new(api_secret));
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            signer,
            clock,
        })
    }

    /// Fail when an authenticated call lacks the key or the secret.
    pub fn ensure_credentials(&self, auth_needed: bool) -> Result<()> {
        if auth_needed && (self.api_key.is_empty() || self.signer.is_none()) {
            return Err(FybError::MissingCredentials);
        }
        Ok(())
    }

    /// Resolve `resource` against the base URL.
    ///
    /// Absolute `http`/`https` resources are used verbatim.
    pub fn resolve_url(&self, resource: &str) -> Result<Url> {
        if resource.starts_with("http://") || resource.starts_with("https://") {
            return Ok(Url::parse(resource)?);
        }
        let joined = format!("{}/{}", self.base_url, resource.trim_start_matches('/'));
        Ok(Url::parse(&joined)?)
    }

    /// Build a request; signed requests get a fresh `timestamp` field.
    pub fn build(
        &self,
        method: Method,
        resource: &str,
        payload: Form,
        auth_needed: bool,
    ) -> Result<PendingRequest> {
        self.ensure_credentials(auth_needed)?;
        let url = self.resolve_url(resource)?;

        let mut form = Form::new();
        if auth_needed {
            form.insert(
                TIMESTAMP_FIELD.to_string(),
                self.clock.unix_timestamp().to_string(),
            );
        }
        // Payload fields overwrite injected ones.
        form.extend(payload);
        let body = encode_form(&form);

        let mut headers = HeaderMap::new();
        if let (true, Some(signer)) = (auth_needed, &self.signer) {
            headers.insert(KEY_HEADER, HeaderValue::from_str(&self.api_key)?);
            headers.insert(SIG_HEADER, HeaderValue::from_str(&signer.sign_request(&body)?)?);
        }
        if method == Method::POST || method == Method::PUT {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            );
        }
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(PendingRequest {
            method,
            url,
            form,
            body,
            headers,
        })
    }
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("base_url", &self.base_url)
            .field("has_key", &!self.api_key.is_empty())
            .field("has_secret", &self.signer.is_some())
            .field("clock", &self.clock)
            .finish()
    }
}

/// URL form-encode fields in key order
pub fn encode_form(form: &Form) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form.iter())
        .finish()
}
