//! Helpers for contract tests against a live club backend.
//!
//! Tests are skipped unless BACKEND_URL points at a running server. The
//! client decodes every response with the same DTOs the web console uses.

use anyhow::{bail, Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use shared::{CreatePlayerRequest, ErrorResponse, GameDto, NewsDto, PlayerDto, StatsDto, TeamDto};
use std::env;

/// Base URL of the backend under test, without a trailing slash
pub fn base_url() -> Option<String> {
    env::var("BACKEND_URL")
        .ok()
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
}

/// Returns the base URL, or logs why the calling test is skipped
pub fn skip_if_no_backend() -> Option<String> {
    let _ = env_logger::builder().is_test(true).try_init();
    let url = base_url();
    if url.is_none() {
        eprintln!("Skipping test: BACKEND_URL not set");
    }
    url
}

/// A rejected write: HTTP status and the server's detail message
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub status: u16,
    pub detail: String,
}

pub struct ClubClient {
    base_url: String,
    http: reqwest::Client,
}

impl ClubClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", url))?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            bail!("GET {} returned {}: {}", url, status, body);
        }
        res.json::<T>()
            .await
            .with_context(|| format!("Failed to decode {}", path))
    }

    pub async fn players(&self) -> Result<Vec<PlayerDto>> {
        self.get("players").await
    }

    pub async fn teams(&self) -> Result<Vec<TeamDto>> {
        self.get("teams").await
    }

    pub async fn games(&self) -> Result<Vec<GameDto>> {
        self.get("games").await
    }

    pub async fn news(&self) -> Result<Vec<NewsDto>> {
        self.get("news").await
    }

    pub async fn stats(&self) -> Result<StatsDto> {
        self.get("stats").await
    }

    /// Posts a registration body. Transport failures are `Err`; a non-2xx
    /// answer is `Ok(Err(rejection))`.
    pub async fn register<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<std::result::Result<(), Rejection>> {
        let url = self.url("players");
        log::debug!("POST {}", url);
        let res = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to POST {}", url))?;
        let status = res.status();
        if status.is_success() {
            return Ok(Ok(()));
        }
        let detail = match res.json::<ErrorResponse>().await {
            Ok(body) => body.message(),
            Err(_) => status.canonical_reason().unwrap_or_default().to_string(),
        };
        log::info!("POST {} rejected with {}: {}", url, status, detail);
        Ok(Err(Rejection {
            status: status.as_u16(),
            detail,
        }))
    }
}

/// A registration that is unique per run so tests can find it again
pub fn unique_registration(tag: &str) -> CreatePlayerRequest {
    let stamp = chrono::Utc::now().timestamp_millis();
    CreatePlayerRequest {
        name: format!("Contract {} {}", tag, stamp),
        age: 9,
        parent_name: "Jo Kim".to_string(),
        parent_email: format!("contract_{}@example.com", stamp),
        parent_phone: "555-0100".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use validator::Validate;

    #[test]
    fn test_client_builds_api_paths() {
        let client = ClubClient::new("http://localhost:8001");
        assert_eq!(client.url("players"), "http://localhost:8001/api/players");
    }

    #[test]
    fn test_unique_registration_is_valid() {
        let request = unique_registration("lib");
        assert!(request.validate().is_ok());
        assert!(request.name.contains("lib"));
    }
}
