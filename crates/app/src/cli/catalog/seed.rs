use clap::Args;
use storefront_app::domain::catalog::{
    PgCatalogService,
    seed::{DEFAULT_VARIANTS, seed_variants},
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let pool = args.database.connect().await?;

    let summary = seed_variants(&PgCatalogService::new(pool), DEFAULT_VARIANTS).await;

    println!("created: {}", summary.created);
    println!("existing: {}", summary.existing);
    println!("failed: {}", summary.failed);

    if summary.failed > 0 {
        return Err(format!("{} variant(s) could not be seeded", summary.failed));
    }

    Ok(())
}
