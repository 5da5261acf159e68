//! Site and scenario command handlers.

use tabled::Tabled;

use omada_api::OmadaClient;

use crate::cli::{GlobalOpts, SitesArgs, SitesCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Scenario")]
    scenario: String,
    #[tabled(rename = "Region")]
    region: String,
}

impl From<&serde_json::Value> for SiteRow {
    fn from(record: &serde_json::Value) -> Self {
        Self {
            id: output::field(record, "id"),
            name: output::field(record, "name"),
            scenario: output::field(record, "scenario"),
            region: output::field(record, "region"),
        }
    }
}

pub async fn handle(
    client: &OmadaClient,
    args: SitesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SitesCommand::List => {
            let sites = client.get_sites().await?;
            let out = output::render_list(&global.output, &sites, |s| SiteRow::from(s), |s| {
                output::field(s, "name")
            });
            output::print_output(&out, global.quiet);
        }
        SitesCommand::Settings { site } => {
            let site = site.as_deref().unwrap_or(client.site());
            let settings = client.get_site_settings(site).await?;
            let out = output::render_single(&global.output, &settings, |_| site.to_owned());
            output::print_output(&out, global.quiet);
        }
    }
    Ok(())
}

pub async fn handle_scenarios(client: &OmadaClient, global: &GlobalOpts) -> Result<(), CliError> {
    let scenarios = client.get_scenarios().await?;
    let out = output::render_single(&global.output, &scenarios, |v| match v.as_array() {
        Some(items) => items
            .iter()
            .map(|s| s.as_str().map_or_else(|| s.to_string(), str::to_owned))
            .collect::<Vec<_>>()
            .join("\n"),
        None => v.to_string(),
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
