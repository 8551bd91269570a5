use clap::{Args, Parser, Subcommand};
use sqlx::PgPool;
use storefront_app::database;

mod admin;
mod catalog;
mod counter;
mod db;
mod token;

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Admin(admin::AdminCommand),
    Token(token::TokenCommand),
    Catalog(catalog::CatalogCommand),
    Counter(counter::CounterCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Admin(command) => admin::run(command).await,
            Commands::Token(command) => token::run(command).await,
            Commands::Catalog(command) => catalog::run(command).await,
            Commands::Counter(command) => counter::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<PgPool, String> {
        database::connect(&self.database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definitions_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn token_create_requires_admin() {
        let result = Cli::try_parse_from([
            "storefront-app",
            "token",
            "create",
            "--database-url",
            "postgres://localhost/storefront",
        ]);

        assert!(result.is_err());
    }
}
