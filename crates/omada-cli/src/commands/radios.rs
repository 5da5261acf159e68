//! Bulk radio/LED switch across every access point of the site.

use tracing::info;

use omada_api::{LedSetting, OmadaClient, RadioBand};

use crate::cli::{GlobalOpts, RadiosArgs};
use crate::commands::devices::access_points;
use crate::error::CliError;
use crate::output;

pub async fn handle(
    client: &OmadaClient,
    args: &RadiosArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let (enabled, led, verb) = if args.disable {
        (false, LedSetting::Off, "disabling")
    } else {
        (true, LedSetting::On, "enabling")
    };

    let records = client.get_devices().await?;
    let aps = access_points(&records);

    for ap in &aps {
        for band in args.bands.iter().copied().map(RadioBand::from) {
            info!("{verb} {band} radio on {} ({})", ap.label(), ap.mac);
            client.set_eap_radio(&ap.mac, band, enabled).await?;
        }

        if !args.no_leds {
            info!("{verb} led on {} ({})", ap.label(), ap.mac);
            client.set_eap_led(&ap.mac, led).await?;
        }
    }

    let done = if enabled { "enabled" } else { "disabled" };
    output::print_output(
        &format!("radios {done} on {} access point(s)", aps.len()),
        global.quiet,
    );
    Ok(())
}
