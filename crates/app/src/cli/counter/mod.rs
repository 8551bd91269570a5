use clap::{Args, Subcommand};

mod show;

#[derive(Debug, Args)]
pub(crate) struct CounterCommand {
    #[command(subcommand)]
    command: CounterSubcommand,
}

#[derive(Debug, Subcommand)]
enum CounterSubcommand {
    /// Print an admin's daily counts
    Show(show::ShowCounterArgs),
}

pub(crate) async fn run(command: CounterCommand) -> Result<(), String> {
    match command.command {
        CounterSubcommand::Show(args) => show::run(args).await,
    }
}
