//! Shared helpers: a canned upstream and a pinned clock.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Europe::Paris;
use grandlyon_board::fetch::HttpClient;
use std::collections::HashMap;
use std::sync::Mutex;

pub const PASSAGES: &str = include_str!("../fixtures/passages.json");
pub const STOPS: &str = include_str!("../fixtures/stops.json");
pub const STATIONS: &str = include_str!("../fixtures/station_info.json");

/// A request seen by [`MockClient`].
#[derive(Debug, Clone)]
pub struct Seen {
    pub url: String,
    pub authorization: Option<String>,
}

/// Answers requests from a URL → (status, body) table; unknown URLs get a 404.
#[derive(Default)]
pub struct MockClient {
    routes: HashMap<String, (u16, String)>,
    seen: Mutex<Vec<Seen>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes.insert(url.to_string(), (status, body.to_string()));
        self
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        let url = req.url().to_string();
        let authorization = req
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        self.seen.lock().unwrap().push(Seen {
            url: url.clone(),
            authorization,
        });

        let (status, body) = self
            .routes
            .get(&url)
            .cloned()
            .unwrap_or((404, String::from("not found")));
        let resp = axum::http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        Ok(reqwest::Response::from(resp))
    }
}

/// 2022-08-25 08:23:10 in Lyon.
pub fn now() -> DateTime<Utc> {
    Paris
        .with_ymd_and_hms(2022, 8, 25, 8, 23, 10)
        .unwrap()
        .with_timezone(&Utc)
}
