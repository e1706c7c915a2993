//! Upstream HTTP access.
//!
//! [`HttpClient`] is the trait every pipeline fetches through, [`BasicClient`]
//! the production implementation and [`BasicAuth`] a wrapper adding basic
//! authentication.

mod basic;
mod client;
mod nullable;
pub mod auth;

pub use auth::{BasicAuth, Credentials};
pub use basic::BasicClient;
pub use client::HttpClient;
pub use nullable::null_as_default;

use anyhow::{Result, anyhow};
use serde::de::DeserializeOwned;

/// GETs `url` and decodes the JSON body into `T`.
///
/// A non-2xx status is an error carrying the upstream body text.
pub async fn fetch_json<C, T>(client: &C, url: &str) -> Result<T>
where
    C: HttpClient + ?Sized,
    T: DeserializeOwned,
{
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(anyhow!("upstream returned status {status}: {body}"));
    }

    Ok(resp.json().await?)
}
