use clap::{Args, Subcommand};
use storefront_app::auth::OpenBaoConfig;

mod create;
mod list;
mod revoke;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    Create(create::CreateTokenArgs),
    List(list::ListTokensArgs),
    Revoke(revoke::RevokeTokenArgs),
}

pub(crate) async fn run(command: TokenCommand) -> Result<(), String> {
    match command.command {
        TokenSubcommand::Create(args) => create::run(args).await,
        TokenSubcommand::List(args) => list::run(args).await,
        TokenSubcommand::Revoke(args) => revoke::run(args).await,
    }
}

#[derive(Debug, Args)]
pub(crate) struct OpenBaoArgs {
    /// OpenBao server address
    #[arg(long, env = "OPENBAO_ADDR")]
    openbao_addr: String,

    /// OpenBao authentication token
    #[arg(long, env = "OPENBAO_TOKEN", hide_env_values = true)]
    openbao_token: String,

    /// OpenBao Transit key name
    #[arg(long, env = "OPENBAO_TRANSIT_KEY", default_value = "storefront-admin-tokens")]
    openbao_transit_key: String,
}

impl From<OpenBaoArgs> for OpenBaoConfig {
    fn from(args: OpenBaoArgs) -> Self {
        Self {
            addr: args.openbao_addr,
            token: args.openbao_token,
            transit_key: args.openbao_transit_key,
        }
    }
}
