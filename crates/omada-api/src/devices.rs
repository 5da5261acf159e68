// Device and access-point endpoints
//
// Listing is read-only (`GET /sites/{site}/devices`); per-EAP LED and radio
// changes are PATCHes on `/sites/{site}/eaps/{mac}`.

use serde_json::json;
use tracing::debug;

use crate::client::OmadaClient;
use crate::error::Error;
use crate::models::{LedSetting, RadioBand};

impl OmadaClient {
    /// List all devices of the configured site.
    ///
    /// `GET /api/v2/sites/{site}/devices`. The records are returned exactly
    /// as the controller sent them. Requires a prior [`login`](Self::login).
    pub async fn get_devices(&self) -> Result<Vec<serde_json::Value>, Error> {
        self.get_devices_for_site(self.site()).await
    }

    /// List all devices of `site`.
    pub async fn get_devices_for_site(&self, site: &str) -> Result<Vec<serde_json::Value>, Error> {
        let url = self.site_url(site, "/devices")?;
        debug!(site, "listing devices");
        self.get(url).await
    }

    /// Full record of one access point.
    ///
    /// `GET /api/v2/sites/{site}/eaps/{mac}`
    pub async fn get_eap(&self, mac: &str) -> Result<serde_json::Value, Error> {
        let url = self.site_url(self.site(), &format!("/eaps/{mac}"))?;
        debug!(mac, "fetching eap");
        self.get(url).await
    }

    /// Set the LED mode of an access point.
    ///
    /// `PATCH /api/v2/sites/{site}/eaps/{mac}` with `{"ledSetting": n}`
    pub async fn set_eap_led(&self, mac: &str, led: LedSetting) -> Result<serde_json::Value, Error> {
        let url = self.site_url(self.site(), &format!("/eaps/{mac}"))?;
        debug!(mac, %led, "setting eap led");
        self.patch(url, &json!({ "ledSetting": led.code() })).await
    }

    /// Enable or disable one radio band of an access point.
    ///
    /// `PATCH /api/v2/sites/{site}/eaps/{mac}` with
    /// `{"radioSetting2g": {"radioEnable": bool}}` (or `radioSetting5g`).
    pub async fn set_eap_radio(
        &self,
        mac: &str,
        band: RadioBand,
        enabled: bool,
    ) -> Result<serde_json::Value, Error> {
        let url = self.site_url(self.site(), &format!("/eaps/{mac}"))?;
        debug!(mac, %band, enabled, "setting eap radio");

        let mut body = serde_json::Map::new();
        body.insert(band.setting_key().into(), json!({ "radioEnable": enabled }));
        self.patch(url, &body).await
    }
}
