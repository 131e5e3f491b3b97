use std::io::Write;

use udaya_config::{ConfigError, load, parse};
use udaya_vedic_base::{AyanamshaSystem, RiseSetConfig};

const CHENNAI: &str = r#"
[location]
latitude = 13.0827
longitude = 80.2707
altitude_m = 6.0
tz_offset_hours = 5.5

[zodiac]
ayanamsha = "raman"

[riseset]
refraction_arcmin = 35.0
semidiameter_arcmin = 16.0
altitude_correction = false

[special_points]
aarudam = 123.4
kavippu = 210.0
"#;

#[test]
fn full_file() {
    let cfg = parse(CHENNAI).unwrap();
    assert!((cfg.location.latitude_deg - 13.0827).abs() < 1e-12);
    assert!((cfg.location.longitude_deg - 80.2707).abs() < 1e-12);
    assert!((cfg.location.altitude_m - 6.0).abs() < 1e-12);
    assert!((cfg.tz_offset_hours - 5.5).abs() < 1e-12);
    assert_eq!(cfg.ayanamsha, AyanamshaSystem::Raman);
    assert!((cfg.riseset.refraction_arcmin - 35.0).abs() < 1e-12);
    assert!(!cfg.riseset.altitude_correction);
    assert_eq!(cfg.special_points.aarudam, Some(123.4));
    assert_eq!(cfg.special_points.kavippu, Some(210.0));
}

#[test]
fn defaults_when_sections_missing() {
    let cfg = parse("[zodiac]\nayanamsha = \"kp\"\n").unwrap();
    assert_eq!(cfg.ayanamsha, AyanamshaSystem::KP);
    assert_eq!(cfg.riseset, RiseSetConfig::default());
    assert!((cfg.location.latitude_deg - 51.4769).abs() < 1e-12);
    assert_eq!(cfg.special_points.aarudam, None);
}

#[test]
fn partial_riseset_section() {
    let cfg = parse("[riseset]\naltitude_correction = false\n").unwrap();
    assert!(!cfg.riseset.altitude_correction);
    assert!((cfg.riseset.refraction_arcmin - 34.0).abs() < 1e-12);
}

#[test]
fn out_of_range_values_are_invalid() {
    for text in [
        "[location]\nlatitude = 91.0\n",
        "[location]\nlatitude = -90.5\n",
        "[location]\nlongitude = 181.0\n",
        "[location]\ntz_offset_hours = 14.5\n",
        "[location]\ntz_offset_hours = -15.0\n",
        "[zodiac]\nayanamsha = \"tropical\"\n",
    ] {
        let err = parse(text).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{text:?}: {err:?}");
    }
}

#[test]
fn boundary_values_accepted() {
    let cfg = parse("[location]\nlatitude = -90.0\nlongitude = 180.0\ntz_offset_hours = 14.0\n")
        .unwrap();
    assert_eq!(cfg.location.latitude_deg, -90.0);
    assert_eq!(cfg.tz_offset_hours, 14.0);
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = parse("[location\nlatitude = 1").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

#[test]
fn wrong_value_type_is_parse_error() {
    let err = parse("[location]\nlatitude = \"north\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!("udaya_config_{}.toml", std::process::id()));
    {
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(CHENNAI.as_bytes()).unwrap();
    }
    let cfg = load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(cfg.ayanamsha, AyanamshaSystem::Raman);
}

#[test]
fn missing_file_is_io_error() {
    let err = load("/nonexistent/udaya.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)), "got {err:?}");
}
