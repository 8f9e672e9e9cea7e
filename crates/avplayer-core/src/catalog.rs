//! Preset catalog - the four built-in DRM configurations
//!
//! A read-only lookup from preset identifier to its immutable record, with a
//! deterministic iteration order (used by hosts to build a selectable list)
//! and cyclic next/previous navigation over that order.

use serde::{Deserialize, Serialize};
use url::Url;

/// Identifier for one of the built-in presets.
///
/// Order of [`PresetId::ALL`] is the catalog's display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetId {
    #[default]
    NoDrm,
    PlayReady,
    PlayReadyChallenge,
    Widevine,
}

impl PresetId {
    /// All presets in catalog order
    pub const ALL: [PresetId; 4] = [
        PresetId::NoDrm,
        PresetId::PlayReady,
        PresetId::PlayReadyChallenge,
        PresetId::Widevine,
    ];

    fn position(self) -> usize {
        match self {
            PresetId::NoDrm => 0,
            PresetId::PlayReady => 1,
            PresetId::PlayReadyChallenge => 2,
            PresetId::Widevine => 3,
        }
    }

    /// Next preset in catalog order, wrapping at the end
    pub fn next(self) -> PresetId {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous preset in catalog order, wrapping at the start
    pub fn prev(self) -> PresetId {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for PresetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetId::NoDrm => write!(f, "no-drm"),
            PresetId::PlayReady => write!(f, "playready"),
            PresetId::PlayReadyChallenge => write!(f, "playready-challenge"),
            PresetId::Widevine => write!(f, "widevine"),
        }
    }
}

/// DRM configuration attached to a preset.
///
/// Closed variant set; each variant carries exactly the fields its license
/// flow requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrmConfig {
    /// Clear content, no DRM properties applied
    None,
    /// PlayReady with properties set synchronously before prepare
    PlayReady {
        license_server: Option<Url>,
        custom_data: Option<String>,
    },
    /// PlayReady requesting an explicit challenge; playback starts from the
    /// async-prepare callback once the license response is installed
    PlayReadyChallenge,
    /// Widevine classic, configured through the streaming-property blob
    Widevine {
        license_server: Url,
        custom_data: Option<String>,
    },
}

/// A named, immutable bundle of content URL plus optional DRM parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub id: PresetId,
    /// Display label
    pub name: &'static str,
    /// Content URI opened when this preset is active
    pub url: Url,
    pub drm: DrmConfig,
}

/// The fixed catalog of built-in presets
#[derive(Debug, Clone)]
pub struct Catalog {
    presets: Vec<Preset>,
}

impl Catalog {
    /// Build the catalog of the four built-in presets
    pub fn builtin() -> Self {
        let parse = |url: &str| Url::parse(url).expect("built-in preset URL is valid");

        let presets = vec![
            Preset {
                id: PresetId::NoDrm,
                name: "No DRM",
                url: parse(
                    "http://playready.directtaps.net/smoothstreaming/SSWSS720H264/SuperSpeedway_720.ism/Manifest",
                ),
                drm: DrmConfig::None,
            },
            Preset {
                id: PresetId::PlayReady,
                name: "Playready",
                url: parse(
                    "http://playready.directtaps.net/smoothstreaming/SSWSS720H264PR/SuperSpeedway_720.ism/Manifest",
                ),
                drm: DrmConfig::PlayReady {
                    license_server: Some(parse(
                        "http://playready.directtaps.net/pr/svc/rightsmanager.asmx?PlayRight=1&UseSimpleNonPersistentLicense=1",
                    )),
                    custom_data: None,
                },
            },
            Preset {
                id: PresetId::PlayReadyChallenge,
                name: "Playready GetChallenge",
                url: parse(
                    "http://playready.directtaps.net/smoothstreaming/SSWSS720H264PR/SuperSpeedway_720.ism/Manifest",
                ),
                drm: DrmConfig::PlayReadyChallenge,
            },
            Preset {
                id: PresetId::Widevine,
                name: "Widevine",
                url: parse(
                    "http://commondatastorage.googleapis.com/wvmedia/starz_main_720p_6br_tp.wvm",
                ),
                drm: DrmConfig::Widevine {
                    license_server: parse("https://license.uat.widevine.com/getlicense/widevine"),
                    custom_data: None,
                },
            },
        ];

        Self { presets }
    }

    /// Look up a preset; the catalog always holds every `PresetId`
    pub fn get(&self, id: PresetId) -> &Preset {
        &self.presets[id.position()]
    }

    /// Presets in deterministic catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
