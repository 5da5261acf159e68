//! Command dispatch: bridges CLI args -> client calls -> output formatting.

pub mod admins;
pub mod devices;
pub mod radios;
pub mod sites;

use omada_api::OmadaClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a controller-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &OmadaClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Devices(args) => devices::handle(client, args, global).await,
        Command::Radios(args) => radios::handle(client, &args, global).await,
        Command::Sites(args) => sites::handle(client, args, global).await,
        Command::Scenarios => sites::handle_scenarios(client, global).await,
        Command::Admins => admins::handle(client, global).await,
        // Completions is handled before dispatch
        Command::Completions(_) => unreachable!(),
    }
}
