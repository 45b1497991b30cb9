//! API origin configuration.

const DEFAULT_API_URL: &str = "http://localhost:3000";

/// The REST origin, without a trailing slash.
///
/// Baked in at compile time from `PAWHOME_API_URL`; falls back to the local
/// development server.
pub fn api_base_url() -> String {
    option_env!("PAWHOME_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
    }
}
