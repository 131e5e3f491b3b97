//! Configuration for the udaya engine.
//!
//! A TOML file with optional `[location]`, `[zodiac]`, `[riseset]` and
//! `[special_points]` sections. Missing sections fall back to Greenwich at
//! UTC+0, the Lahiri ayanamsha and the standard sunrise horizon.

pub mod error;

use std::path::Path;

use log::debug;
use serde::Deserialize;
use udaya_time::validate_tz_offset;
use udaya_vedic_base::{AyanamshaSystem, GeoLocation, RiseSetConfig};

pub use error::ConfigError;

/// `[location]` section.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationSection {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_m: f64,
    pub tz_offset_hours: f64,
}

impl Default for LocationSection {
    fn default() -> Self {
        let greenwich = GeoLocation::default();
        Self {
            latitude: greenwich.latitude_deg,
            longitude: greenwich.longitude_deg,
            altitude_m: greenwich.altitude_m,
            tz_offset_hours: 0.0,
        }
    }
}

impl LocationSection {
    pub fn geo_location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude, self.longitude, self.altitude_m)
    }
}

/// `[zodiac]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZodiacSection {
    pub ayanamsha: String,
}

impl Default for ZodiacSection {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::default().name().to_string(),
        }
    }
}

/// `[special_points]` section: longitudes supplied from outside the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecialPointsSection {
    pub aarudam: Option<f64>,
    pub kavippu: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    location: LocationSection,
    zodiac: ZodiacSection,
    riseset: RiseSetConfig,
    special_points: SpecialPointsSection,
}

/// Validated configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UdayaConfig {
    pub location: GeoLocation,
    pub tz_offset_hours: f64,
    pub ayanamsha: AyanamshaSystem,
    pub riseset: RiseSetConfig,
    pub special_points: SpecialPointsSection,
}

impl Default for UdayaConfig {
    fn default() -> Self {
        Self {
            location: GeoLocation::default(),
            tz_offset_hours: 0.0,
            ayanamsha: AyanamshaSystem::default(),
            riseset: RiseSetConfig::default(),
            special_points: SpecialPointsSection::default(),
        }
    }
}

impl UdayaConfig {
    /// Re-check ranges after fields were overridden (e.g. from the command line).
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.location
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        validate_tz_offset(self.tz_offset_hours)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        let rs = &self.riseset;
        if !rs.refraction_arcmin.is_finite() || !rs.semidiameter_arcmin.is_finite() {
            return Err(ConfigError::Invalid(
                "riseset refraction and semidiameter must be finite".to_string(),
            ));
        }
        for (name, value) in [
            ("aarudam", self.special_points.aarudam),
            ("kavippu", self.special_points.kavippu),
        ] {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}

impl TryFrom<RawConfig> for UdayaConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let ayanamsha = raw
            .zodiac
            .ayanamsha
            .parse::<AyanamshaSystem>()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        let config = Self {
            location: raw.location.geo_location(),
            tz_offset_hours: raw.location.tz_offset_hours,
            ayanamsha,
            riseset: raw.riseset,
            special_points: raw.special_points,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse and validate configuration text.
pub fn parse(contents: &str) -> Result<UdayaConfig, ConfigError> {
    let raw: RawConfig = toml::from_str(contents)?;
    UdayaConfig::try_from(raw)
}

/// Load and validate a configuration file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<UdayaConfig, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config = parse(&contents)?;
    debug!(
        "loaded config from {}: lat {:.4}, lon {:.4}, tz {:+}, {}",
        path.display(),
        config.location.latitude_deg,
        config.location.longitude_deg,
        config.tz_offset_hours,
        config.ayanamsha.name()
    );
    Ok(config)
}
