use crate::fetch::client::HttpClient;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, HeaderValue};

/// Username and password for the Grand Lyon data portal.
#[derive(Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value of the `Authorization` header for these credentials.
    fn header_value(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// An [`HttpClient`] wrapper that sends HTTP basic authentication with every
/// request.
pub struct BasicAuth<C> {
    pub inner: C,
    pub credentials: Credentials,
}

impl<C> BasicAuth<C> {
    pub fn new(inner: C, credentials: Credentials) -> Self {
        Self { inner, credentials }
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for BasicAuth<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        if let Ok(mut value) = HeaderValue::from_str(&self.credentials.header_value()) {
            value.set_sensitive(true);
            req.headers_mut().insert(AUTHORIZATION, value);
        }
        self.inner.execute(req).await
    }
}
