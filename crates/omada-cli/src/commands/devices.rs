//! Device command handlers.

use tabled::Tabled;

use omada_api::{DeviceSummary, OmadaClient, RadioBand};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Type")]
    dtype: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&serde_json::Value> for DeviceRow {
    fn from(record: &serde_json::Value) -> Self {
        Self {
            name: output::field(record, "name"),
            mac: output::field(record, "mac"),
            dtype: output::field(record, "type"),
            model: output::field(record, "model"),
            ip: output::field(record, "ip"),
            status: output::field(record, "status"),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &OmadaClient,
    args: DevicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DevicesCommand::List => {
            let devices = client.get_devices().await?;
            let out = output::render_list(&global.output, &devices, |d| DeviceRow::from(d), |d| {
                output::field(d, "mac")
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DevicesCommand::Get { mac } => {
            let eap = client.get_eap(&mac).await?;
            let out = output::render_single(&global.output, &eap, |d| output::field(d, "mac"));
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DevicesCommand::Led { mac, state } => {
            client.set_eap_led(&mac, state.into()).await?;
            if !global.quiet {
                eprintln!("LED on {mac} set to {}", omada_api::LedSetting::from(state));
            }
            Ok(())
        }

        DevicesCommand::Radio { mac, band, state } => {
            let band = RadioBand::from(band);
            client.set_eap_radio(&mac, band, state.enabled()).await?;
            if !global.quiet {
                let verb = if state.enabled() { "enabled" } else { "disabled" };
                eprintln!("{band} radio {verb} on {mac}");
            }
            Ok(())
        }
    }
}

/// Access points among the site's device records. Records without a
/// `type` field are kept.
pub fn access_points(records: &[serde_json::Value]) -> Vec<DeviceSummary> {
    records
        .iter()
        .filter_map(DeviceSummary::from_record)
        .filter(|d| !d.mac.is_empty())
        .filter(|d| d.device_type.as_deref().is_none_or(|t| t == "ap"))
        .collect()
}
