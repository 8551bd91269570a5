//! Catalog Config

use clap::Args;

/// Catalog startup settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Insert missing default variants at startup
    #[arg(
        long,
        env = "SEED_CATALOG",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub seed_catalog: bool,
}
