use std::env;
use std::path::PathBuf;

pub const DEFAULT_TO_EMAIL: &str = "hello@nousu.co";
pub const DEFAULT_FROM_EMAIL: &str = "onboarding@resend.dev";
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_STATIC_DIR: &str = "../frontend/dist";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Without a key the relay answers every submission with a 500.
    pub resend_api_key: Option<String>,
    pub to_email: String,
    pub from_email: String,
    pub resend_api_url: String,
    pub static_dir: PathBuf,
    pub bind_addr: String,
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            resend_api_key: non_empty("RESEND_API_KEY"),
            to_email: non_empty("TO_EMAIL").unwrap_or_else(|| DEFAULT_TO_EMAIL.to_string()),
            from_email: non_empty("FROM_EMAIL").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
            resend_api_url: non_empty("RESEND_API_URL")
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }

    pub fn validate_env(&self) {
        if self.resend_api_key.is_none() {
            tracing::warn!("RESEND_API_KEY is not set, waitlist submissions will fail");
        }
        if !self.static_dir.is_dir() {
            tracing::warn!(
                "static dir {} does not exist, only the api will be served",
                self.static_dir.display()
            );
        }
    }
}
