//! DRM property payloads
//!
//! The runtime takes DRM configuration as a (system, operation, payload)
//! triple. PlayReady payloads are JSON documents with the platform's
//! PascalCase key names; Widevine classic is configured through a
//! pipe-delimited parameter blob submitted as a streaming property instead.

use serde::{Deserialize, Serialize};
use url::Url;

/// DRM systems addressable through `set_drm`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrmSystem {
    PlayReady,
    Widevine,
}

impl DrmSystem {
    /// Platform wire name
    pub fn name(&self) -> &'static str {
        match self {
            DrmSystem::PlayReady => "PLAYREADY",
            DrmSystem::Widevine => "WIDEVINE",
        }
    }
}

impl std::fmt::Display for DrmSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Actions accepted by the runtime's DRM call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrmOperation {
    /// Configure license acquisition before prepare
    SetProperties,
    /// Install a license response obtained out-of-band (challenge flow)
    InstallLicense,
}

impl DrmOperation {
    pub fn name(&self) -> &'static str {
        match self {
            DrmOperation::SetProperties => "SetProperties",
            DrmOperation::InstallLicense => "InstallLicense",
        }
    }
}

impl std::fmt::Display for DrmOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// PlayReady `SetProperties` payload.
///
/// Absent optional fields are omitted from the JSON entirely; the runtime
/// treats a present-but-empty value differently from a missing key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayReadyProperties {
    pub delete_license_after_use: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_server: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_challenge: Option<bool>,
}

impl PlayReadyProperties {
    /// Direct license acquisition against `license_server`
    pub fn direct(license_server: Option<Url>, custom_data: Option<String>) -> Self {
        Self {
            delete_license_after_use: true,
            license_server,
            custom_data,
            get_challenge: None,
        }
    }

    /// Challenge flow: the runtime surfaces the license challenge through a
    /// DRM event instead of contacting a server itself
    pub fn challenge() -> Self {
        Self {
            delete_license_after_use: true,
            license_server: None,
            custom_data: None,
            get_challenge: Some(true),
        }
    }
}

/// PlayReady `InstallLicense` payload carrying the out-of-band response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LicenseResponse {
    pub response_message: String,
}

impl LicenseResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { response_message: message.into() }
    }
}

/// Assemble the Widevine classic parameter blob.
///
/// Field order and the empty placeholder fields are fixed by the platform;
/// custom data, when present, rides after `USER_DATA=`.
pub fn widevine_parameter(
    device_id: &str,
    license_server: &Url,
    custom_data: Option<&str>,
) -> String {
    format!(
        "DEVICE_ID={device_id}|DEVICE_TYPE_ID=60|STREAM_ID=|IP_ADDR=|DRM_URL={license_server}\
         |PORTAL=OEM|I_SEEK=|CUR_TIME=|USER_DATA={}",
        custom_data.unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playready_direct_payload() {
        let props = PlayReadyProperties::direct(
            Some(Url::parse("http://license.example.com/rightsmanager.asmx").unwrap()),
            None,
        );
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&props).unwrap()).unwrap();

        assert_eq!(json["DeleteLicenseAfterUse"], true);
        assert_eq!(
            json["LicenseServer"],
            "http://license.example.com/rightsmanager.asmx"
        );
        assert!(json.get("CustomData").is_none());
        assert!(json.get("GetChallenge").is_none());
    }

    #[test]
    fn test_playready_custom_data_included_when_present() {
        let props = PlayReadyProperties::direct(None, Some("token=abc".into()));
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&props).unwrap()).unwrap();

        assert_eq!(json["CustomData"], "token=abc");
        assert!(json.get("LicenseServer").is_none());
    }

    #[test]
    fn test_playready_challenge_payload() {
        let props = PlayReadyProperties::challenge();
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&props).unwrap()).unwrap();

        assert_eq!(json["DeleteLicenseAfterUse"], true);
        assert_eq!(json["GetChallenge"], true);
        assert!(json.get("LicenseServer").is_none());
    }

    #[test]
    fn test_install_license_payload() {
        let response = LicenseResponse::new("BASE64LICENSE");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"ResponseMessage":"BASE64LICENSE"}"#);
    }

    #[test]
    fn test_widevine_parameter_layout() {
        let server = Url::parse("https://license.uat.widevine.com/getlicense/widevine").unwrap();
        let blob = widevine_parameter("ESN123", &server, None);

        assert!(blob.starts_with("DEVICE_ID=ESN123|DEVICE_TYPE_ID=60|"));
        assert!(blob.contains("|DRM_URL=https://license.uat.widevine.com/getlicense/widevine|"));
        assert!(blob.ends_with("|USER_DATA="));
    }

    #[test]
    fn test_widevine_parameter_custom_data() {
        let server = Url::parse("https://license.example.com/wv").unwrap();
        let blob = widevine_parameter("ESN123", &server, Some("portal-token"));
        assert!(blob.ends_with("|USER_DATA=portal-token"));
    }
}
