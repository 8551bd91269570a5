use clap::Args;
use storefront_app::domain::catalog::{CatalogService, PgCatalogService};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListVariantsArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListVariantsArgs) -> Result<(), String> {
    let pool = args.database.connect().await?;

    let variants = PgCatalogService::new(pool)
        .list_variants()
        .await
        .map_err(|error| format!("failed to list variants: {error}"))?;

    if variants.is_empty() {
        println!("catalog is empty");
        return Ok(());
    }

    for variant in variants {
        let status = if variant.active { "active" } else { "inactive" };

        println!(
            "{}\t{}\t{} kg\t{status}",
            variant.variant_id, variant.name, variant.weight_kg
        );
    }

    Ok(())
}
