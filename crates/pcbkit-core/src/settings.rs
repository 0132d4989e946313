use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::geometry::{Coord, Size};
use crate::netclass::{NetClass, ZoneConnection};

/// Board-wide defaults. Footprints fall back to these when a local override
/// is zero, and new footprints take their text sizes from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    pub text_size: Size,
    pub text_thickness: Coord,
    pub solder_mask_margin: Coord,
    pub solder_paste_margin: Coord,
    pub solder_paste_margin_ratio: f64,
    pub zone_connection: ZoneConnection,
    pub thermal_width: Coord,
    pub thermal_gap: Coord,
    pub default_net_class: NetClass,
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            text_size: Size::square(1_000_000),
            text_thickness: 150_000,
            solder_mask_margin: 0,
            solder_paste_margin: 0,
            solder_paste_margin_ratio: 0.0,
            zone_connection: ZoneConnection::Thermal,
            thermal_width: 500_000,
            thermal_gap: 500_000,
            default_net_class: NetClass::default(),
        }
    }
}

impl DesignSettings {
    /// Parse a settings document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings = serde_json::from_str(json)?;
        log::debug!("Loaded design settings: {:?}", settings);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_keeps_defaults() {
        let settings = DesignSettings::from_json(r#"{ "solder_mask_margin": 50000 }"#).unwrap();
        assert_eq!(settings.solder_mask_margin, 50_000);
        assert_eq!(settings.text_thickness, 150_000);
        assert_eq!(settings.default_net_class.name, NetClass::DEFAULT_NAME);
    }

    #[test]
    fn test_rejects_malformed_document() {
        let err = DesignSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Settings(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = DesignSettings::default();
        settings.zone_connection = ZoneConnection::Full;
        let back = DesignSettings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
    }
}
