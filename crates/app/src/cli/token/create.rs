use std::sync::Arc;

use clap::Args;
use jiff::{SignedDuration, Timestamp};
use storefront_app::{
    auth::{OpenBaoTransit, PgAuthService},
    domain::admins::records::AdminUuid,
};
use uuid::Uuid;

use crate::cli::{DatabaseArgs, token::OpenBaoArgs};

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[command(flatten)]
    openbao: OpenBaoArgs,

    /// Admin UUID that should own the token
    #[arg(long)]
    admin_uuid: Uuid,

    /// Token expiration timestamp (RFC 3339)
    #[arg(long, conflicts_with = "ttl_hours")]
    expires_at: Option<Timestamp>,

    /// Token lifetime in hours, used when no explicit expiry is given
    #[arg(long, default_value_t = 720)]
    ttl_hours: u32,
}

pub(crate) async fn run(args: CreateTokenArgs) -> Result<(), String> {
    let expires_at = resolve_expiry(args.expires_at, args.ttl_hours, Timestamp::now())?;

    let pool = args.database.connect().await?;

    let hasher = Arc::new(OpenBaoTransit::new(args.openbao.into()));
    let service = PgAuthService::new(pool, hasher);

    let issued = service
        .issue_api_token(AdminUuid::from_uuid(args.admin_uuid), expires_at)
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("token_uuid: {}", issued.metadata.uuid);
    println!("admin_uuid: {}", issued.metadata.admin_uuid);
    println!("token_version: {}", issued.metadata.version.as_i16());
    println!("token_created_at: {}", issued.metadata.created_at);
    println!("token_expires_at: {}", issued.metadata.expires_at);
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}

fn resolve_expiry(
    expires_at: Option<Timestamp>,
    ttl_hours: u32,
    now: Timestamp,
) -> Result<Timestamp, String> {
    let expires_at = match expires_at {
        Some(expires_at) => expires_at,
        None => now
            .checked_add(SignedDuration::from_hours(i64::from(ttl_hours)))
            .map_err(|error| format!("invalid ttl-hours: {error}"))?,
    };

    if expires_at <= now {
        return Err("token expiry must be in the future".to_string());
    }

    Ok(expires_at)
}
