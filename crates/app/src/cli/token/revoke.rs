use clap::Args;
use storefront_app::auth::PgAuthRepository;
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct RevokeTokenArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Token UUID to revoke
    #[arg(long)]
    token_uuid: Uuid,
}

pub(crate) async fn run(args: RevokeTokenArgs) -> Result<(), String> {
    let pool = args.database.connect().await?;

    let revoked = PgAuthRepository::new(pool)
        .revoke_api_token(args.token_uuid)
        .await
        .map_err(|error| format!("failed to revoke token: {error}"))?;

    match revoked {
        Some(token) => println!("revoked token {} of admin {}", token.uuid, token.admin_uuid),
        None => println!("token {} was not active", args.token_uuid),
    }

    Ok(())
}
