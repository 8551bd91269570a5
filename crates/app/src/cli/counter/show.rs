use clap::Args;
use storefront_app::domain::{
    admins::records::AdminUuid,
    counters::{CounterDay, CountersService, PgCountersService},
};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ShowCounterArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Admin UUID whose counters should be shown
    #[arg(long)]
    admin_uuid: Uuid,

    /// Only show this day (YYYY-MM-DD); all days when omitted
    #[arg(long)]
    day: Option<CounterDay>,
}

pub(crate) async fn run(args: ShowCounterArgs) -> Result<(), String> {
    let pool = args.database.connect().await?;

    let service = PgCountersService::new(pool);
    let admin = AdminUuid::from_uuid(args.admin_uuid);

    if let Some(day) = args.day {
        let count = service
            .get_count(admin, day)
            .await
            .map_err(|error| format!("failed to read counter: {error}"))?;

        println!("{day}\t{count}");

        return Ok(());
    }

    let counters = service
        .list_counters(admin)
        .await
        .map_err(|error| format!("failed to list counters: {error}"))?;

    if counters.is_empty() {
        println!("no counters recorded for admin {admin}");
    }

    for counter in counters {
        println!("{}\t{}", counter.day, counter.count);
    }

    Ok(())
}
