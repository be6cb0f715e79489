//! Auth Config

use clap::Args;

/// API key settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Key clients must present in `x-api-key` or the `code` query parameter
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: String,
}
