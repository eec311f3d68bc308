pub struct Config;

impl Config {
    /// Backend origin, captured from `BACKEND_URL` when the bundle is built.
    ///
    /// Empty means same-origin: Trunk proxies `/api/` in development and the
    /// reverse proxy does it in production.
    pub fn api_base_url() -> String {
        Self::normalize_base_url(option_env!("BACKEND_URL").unwrap_or(""))
    }

    pub(crate) fn normalize_base_url(raw: &str) -> String {
        raw.trim().trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_trailing_slash() {
        assert_eq!(Config::normalize_base_url("https://club.example.com/"), "https://club.example.com");
        assert_eq!(Config::normalize_base_url("https://club.example.com//"), "https://club.example.com");
    }

    #[test]
    fn test_normalize_empty_stays_relative() {
        assert_eq!(Config::normalize_base_url(""), "");
        assert_eq!(Config::normalize_base_url("   "), "");
    }
}
