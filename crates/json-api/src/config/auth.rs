//! Auth Config

use clap::Args;
use storefront_app::auth::OpenBaoConfig;

/// `OpenBao` authentication settings.
#[derive(Debug, Clone, Args)]
pub struct AuthConfig {
    /// `OpenBao` server address
    #[arg(long, env = "OPENBAO_ADDR")]
    pub addr: String,

    /// `OpenBao` authentication token
    #[arg(long, env = "OPENBAO_TOKEN", hide_env_values = true)]
    pub token: String,

    /// `OpenBao` Transit key name
    #[arg(long, env = "OPENBAO_TRANSIT_KEY", default_value = "storefront-admin-tokens")]
    pub transit_key: String,
}

impl From<AuthConfig> for OpenBaoConfig {
    fn from(config: AuthConfig) -> Self {
        Self {
            addr: config.addr,
            token: config.token,
            transit_key: config.transit_key,
        }
    }
}
