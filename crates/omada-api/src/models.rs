// Omada `/api/v2` response types
//
// Every response is wrapped in `{ "errorCode": 0, "msg": "...", "result": ... }`.
// Device and site records are passed through as `serde_json::Value`; the
// controller's schema shifts between firmware versions, so nothing here
// validates them.

use serde::{Deserialize, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard Omada response envelope. `error_code == 0` means success.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub error_code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    pub result: Option<T>,
}

/// `result` of a successful `POST /login`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub token: String,
    #[serde(default)]
    pub role_type: Option<i64>,
}

/// Paged list wrapper used by `/sites` and `/users`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPage {
    #[serde(default)]
    pub total_rows: Option<u64>,
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

// ── EAP settings ─────────────────────────────────────────────────────

/// LED mode of an access point (`ledSetting`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum LedSetting {
    Off,
    On,
    SiteDefault,
}

impl LedSetting {
    /// Wire value: 0 off, 1 on, 2 follow the site setting.
    pub fn code(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
            Self::SiteDefault => 2,
        }
    }
}

/// Radio band of an access point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum RadioBand {
    #[strum(serialize = "2.4GHz")]
    Band2g,
    #[strum(serialize = "5GHz")]
    Band5g,
}

impl RadioBand {
    /// Key of the radio settings object in an EAP PATCH body.
    pub fn setting_key(self) -> &'static str {
        match self {
            Self::Band2g => "radioSetting2g",
            Self::Band5g => "radioSetting5g",
        }
    }
}

// ── Device projection ────────────────────────────────────────────────

/// Display-oriented view of a device record.
///
/// Built from the raw record with [`DeviceSummary::from_record`]; fields the
/// controller omits stay `None`, everything not modeled lands in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceSummary {
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub device_type: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    /// Controller status code (e.g. 14 = connected on recent firmware).
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DeviceSummary {
    /// Project a raw record. Records that are not JSON objects, or whose
    /// known fields have unexpected types, yield `None`.
    pub fn from_record(record: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(record.clone()).ok()
    }

    /// Display label: name if set, else the MAC.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.mac)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_without_result() {
        let env: Envelope<serde_json::Value> =
            serde_json::from_value(json!({ "errorCode": -30109, "msg": "Invalid username or password." }))
                .expect("valid envelope");
        assert_eq!(env.error_code, -30109);
        assert!(env.result.is_none());
    }

    #[test]
    fn login_envelope_without_token() {
        let env: Envelope<LoginResult> =
            serde_json::from_value(json!({ "errorCode": 0, "msg": "Success." }))
                .expect("valid envelope");
        assert!(env.result.is_none());

        let env: Envelope<LoginResult> = serde_json::from_value(json!({
            "errorCode": 0,
            "result": { "roleType": 0, "token": "abc" }
        }))
        .expect("valid envelope");
        assert_eq!(env.result.map(|r| r.token).as_deref(), Some("abc"));
    }

    #[test]
    fn device_summary_keeps_unknown_fields() {
        let record = json!({
            "mac": "AA-BB-CC-DD-EE-FF",
            "name": "Lobby AP",
            "type": "ap",
            "model": "EAP245",
            "status": 14,
            "clientNum": 7
        });

        let summary = DeviceSummary::from_record(&record).expect("object record");
        assert_eq!(summary.label(), "Lobby AP");
        assert_eq!(summary.device_type.as_deref(), Some("ap"));
        assert_eq!(summary.extra.get("clientNum"), Some(&json!(7)));
        assert!(DeviceSummary::from_record(&json!("not an object")).is_none());
    }

    #[test]
    fn eap_setting_wire_values() {
        assert_eq!(LedSetting::SiteDefault.code(), 2);
        assert_eq!(LedSetting::SiteDefault.to_string(), "site-default");
        assert_eq!(RadioBand::Band5g.setting_key(), "radioSetting5g");
        assert_eq!(RadioBand::Band2g.to_string(), "2.4GHz");
    }
}
