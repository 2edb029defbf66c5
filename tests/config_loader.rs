mod common;

use common::temp_config;
use tempfile::TempDir;
use ventured::animation::Direction;
use ventured::config::{Config, ConfigError};
use ventured::ui::theme::ColorMode;

#[test]
fn missing_file_yields_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("absent.toml");
    let config = Config::load_from(&path).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[page]
fps = 60
color_mode = "light"

[animation]
marquee_direction = "right"
rain = false

[links]
contact_email = "hello@example.org"
"#,
    );
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.page.fps, 60);
    assert_eq!(config.page.color_mode, ColorMode::Light);
    assert_eq!(config.animation.marquee_direction, Direction::Right);
    assert!(!config.animation.rain);
    assert_eq!(config.links.contact_email, "hello@example.org");

    let defaults = Config::default();
    assert_eq!(config.animation.reveal_interval_ms, defaults.animation.reveal_interval_ms);
    assert_eq!(config.links.apply_url, defaults.links.apply_url);
    assert_eq!(config.logging, defaults.logging);
}

#[test]
fn out_of_range_probability_is_rejected() {
    let (_dir, path) = temp_config("[animation]\nrain_reset_probability = 1.5\n");
    let err = Config::load_from(&path).expect_err("must fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("rain_reset_probability"));
}

#[test]
fn zero_fps_is_rejected() {
    let (_dir, path) = temp_config("[page]\nfps = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn empty_link_is_rejected() {
    let mut config = Config::default();
    config.links.apply_url = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = temp_config("[page\nfps = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn printed_config_loads_back() {
    let mut config = Config::default();
    config.page.fps = 24;
    config.animation.marquee_gap = 8;
    let text = config.to_toml().expect("serialize");
    let (_dir, path) = temp_config(&text);
    assert_eq!(Config::load_from(&path).expect("reload"), config);
}
