use std::path::PathBuf;

/// Development address of the food-search service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Path of the search endpoint below the base URL.
pub const SEARCH_PATH: &str = "/food/search";

/// Runtime settings for a client session.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the food-search service, without the endpoint path.
    pub base_url: String,

    /// Directory CSV exports are written to.
    pub output_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str, output_dir: PathBuf) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            output_dir,
        }
    }

    /// Full URL of the search endpoint (without the query string).
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), SEARCH_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_url() {
        let config = ClientConfig::default();
        assert_eq!(config.search_url(), "http://127.0.0.1:8000/food/search");
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        let config = ClientConfig::new("https://food.example.com/api/", PathBuf::from("out"));
        assert_eq!(config.base_url, "https://food.example.com/api");
        assert_eq!(
            config.search_url(),
            "https://food.example.com/api/food/search"
        );
    }
}
