use std::time::Duration;

pub const DEFAULT_UPLOAD_URL: &str = "http://127.0.0.1:8000/upload";
pub const DEFAULT_FIELD_NAME: &str = "files";
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// uploader configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// address every file is posted to
    pub upload_url: String,
    /// multipart field carrying the file
    pub field_name: String,
    /// size of the chunks the request body is streamed in
    pub chunk_size: usize,
    /// optional per-request timeout
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            timeout: None,
        }
    }
}

impl Config {
    /// load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// same as `from_env` but reads values through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let upload_url = lookup("FEEDBACK_UPLOAD_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.upload_url);

        let field_name = lookup("FEEDBACK_UPLOAD_FIELD")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.field_name);

        let chunk_size = match lookup("FEEDBACK_UPLOAD_CHUNK_SIZE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    tracing::warn!(value = %raw, "invalid FEEDBACK_UPLOAD_CHUNK_SIZE, using default");
                    defaults.chunk_size
                }
            },
            None => defaults.chunk_size,
        };

        let timeout = match lookup("FEEDBACK_UPLOAD_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    tracing::warn!(value = %raw, "invalid FEEDBACK_UPLOAD_TIMEOUT_SECS, ignoring");
                    None
                }
            },
            None => None,
        };

        Self {
            upload_url,
            field_name,
            chunk_size,
            timeout,
        }
    }
}
