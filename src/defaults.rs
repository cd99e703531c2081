//! Default Configuration Values
//!
//! Every tunable of the binding has its default here.

use std::time::Duration;

/// Service defaults
pub mod service {
    /// Public Rosette endpoint
    pub const BASE_URL: &str = "https://api.rosette.com/rest/v1/";

    /// Environment variable holding the API key
    pub const API_KEY_ENV: &str = "ROSETTE_API_KEY";

    /// Environment variable overriding the base URL
    pub const API_URL_ENV: &str = "ROSETTE_API_URL";
}

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Whole-request timeout. Large documents can take minutes to analyze.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

    /// Default connection timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Rate limiting and retry defaults
pub mod rate_limiting {
    use super::*;

    /// Retries after the first attempt when the server answers 429
    pub const MAX_RETRIES: u32 = 5;

    /// Pause between rate-limited attempts
    pub const RETRY_DELAY: Duration = Duration::from_millis(500);

    /// Upper bound for any single pause
    pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

    /// Jitter applied when enabled (0.0 to 1.0)
    pub const RETRY_JITTER: f64 = 0.1;
}

/// Identification of this binding on the wire
pub mod binding {
    /// Value of `X-RosetteAPI-Binding`
    pub const NAME: &str = "rust";

    /// Value of `X-RosetteAPI-Binding-Version`, also sent as `clientVersion`
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Compiler that built the binding, captured by build.rs
    pub const RUSTC_VERSION: &str = env!("ROSETTE_RUSTC_VERSION");

    /// `User-Agent` value: `<binding>/<version>/<runtime>`
    pub fn user_agent() -> String {
        format!("RosetteAPIRust/{VERSION}/{RUSTC_VERSION}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_ends_with_slash() {
        assert!(service::BASE_URL.ends_with('/'));
    }

    #[test]
    fn user_agent_has_three_segments() {
        let ua = binding::user_agent();
        assert!(ua.starts_with("RosetteAPIRust/"));
        assert_eq!(ua.splitn(3, '/').count(), 3);
        assert!(ua.contains(binding::VERSION));
    }
}
