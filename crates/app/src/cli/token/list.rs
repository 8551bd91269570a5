use clap::Args;
use jiff::Timestamp;
use storefront_app::{auth::PgAuthRepository, domain::admins::records::AdminUuid};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListTokensArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Admin UUID whose tokens should be listed
    #[arg(long)]
    admin_uuid: Uuid,
}

pub(crate) async fn run(args: ListTokensArgs) -> Result<(), String> {
    let pool = args.database.connect().await?;

    let repository = PgAuthRepository::new(pool);

    let tokens = repository
        .list_api_tokens_by_admin(AdminUuid::from_uuid(args.admin_uuid))
        .await
        .map_err(|error| format!("failed to list tokens: {error}"))?;

    if tokens.is_empty() {
        println!("no tokens found for admin {}", args.admin_uuid);
        return Ok(());
    }

    let now = Timestamp::now();

    for token in tokens {
        println!("token_uuid: {}", token.uuid);
        println!("status: {}", token.status_at(now));
        println!("token_version: {}", token.version.as_i16());
        println!("created_at: {}", token.created_at);
        println!(
            "last_used_at: {}",
            token
                .last_used_at
                .map_or_else(|| "never".to_string(), |value| value.to_string())
        );
        println!("expires_at: {}", token.expires_at);

        if let Some(revoked_at) = token.revoked_at {
            println!("revoked_at: {revoked_at}");
        }

        println!();
    }

    Ok(())
}
