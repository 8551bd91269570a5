//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Upper bound for pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Apply pending migrations before serving
    #[arg(
        long,
        env = "RUN_MIGRATIONS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub run_migrations: bool,
}
