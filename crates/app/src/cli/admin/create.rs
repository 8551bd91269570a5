use clap::Args;
use storefront_app::domain::admins::{
    AdminsService, PgAdminsService, data::NewAdmin, records::AdminUuid,
};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateAdminArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Admin display name
    #[arg(long)]
    name: String,

    /// Optional admin UUID; generated when omitted
    #[arg(long)]
    admin_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateAdminArgs) -> Result<(), String> {
    let pool = args.database.connect().await?;

    let service = PgAdminsService::new(pool);
    let uuid = args
        .admin_uuid
        .map_or_else(AdminUuid::new, AdminUuid::from_uuid);

    let admin = service
        .create_admin(NewAdmin {
            uuid,
            name: args.name,
        })
        .await
        .map_err(|error| format!("failed to create admin: {error}"))?;

    println!("admin_uuid: {}", admin.uuid);
    println!("admin_name: {}", admin.name);

    Ok(())
}
