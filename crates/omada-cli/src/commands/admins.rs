//! Admin account listing.

use tabled::Tabled;

use omada_api::OmadaClient;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct AdminRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
}

pub async fn handle(client: &OmadaClient, global: &GlobalOpts) -> Result<(), CliError> {
    let admins = client.get_admins().await?;
    let out = output::render_list(
        &global.output,
        &admins,
        |a| AdminRow {
            name: output::field(a, "name"),
            email: output::field(a, "email"),
            role: output::field(a, "roleName"),
        },
        |a| output::field(a, "name"),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
