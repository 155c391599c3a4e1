use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/management/v1/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_RETRIES: u32 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL that resource paths such as `applications` are joined onto.
    pub api_url: String,
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Total number of attempts for a single request, the first one included.
    pub retries: u32,
    /// Suppresses headers and the spinner.
    ///
    /// Results and errors are still printed.
    pub quiet: u8,
    /// Fail instead of prompting when a value is missing.
    pub disable_input: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retries: DEFAULT_RETRIES,
            quiet: 0,
            disable_input: false,
        }
    }
}
