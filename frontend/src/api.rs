// Re-export all API modules
pub mod client;
pub mod error;
pub mod games;
pub mod news;
pub mod players;
pub mod stats;
pub mod teams;
pub mod utils;

pub use client::{ClubApi, HttpClubApi};
pub use error::ApiError;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    join_url(&Config::api_base_url(), path)
}

fn join_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        // Use absolute URL
        format!("{}{}", base_url, path)
    }
}
