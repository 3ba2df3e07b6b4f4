//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_folio_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("folio") && path_str.ends_with("config.toml"),
        "Path should contain 'folio' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_folio_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("folio.log"),
        "Default log path should end with 'folio.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = write_temp_config(
        "folio_test_config_valid.toml",
        r#"
cell_width = 10.0
cell_height = 20
no_color = true
content_path = "/srv/folio/content.toml"

[layout]
footer_compact_threshold = 700

[layout.skills]
columns = [[1400, 4], [900, 2], [0, 1]]
min_card_width = 260
"#,
    );

    let config = load_config_file(&path)
        .expect("Should parse valid TOML")
        .expect("Should return Some for existing file");
    fs::remove_file(&path).ok();

    assert_eq!(config.cell_width, Some(10.0));
    assert_eq!(config.cell_height, Some(20.0));
    assert_eq!(config.no_color, Some(true));
    assert_eq!(
        config.content_path,
        Some(PathBuf::from("/srv/folio/content.toml"))
    );

    let layout = config.layout.expect("layout table");
    assert_eq!(layout.footer_compact_threshold, Some(700.0));
    let skills = layout.skills.expect("skills table");
    assert_eq!(
        skills.columns,
        Some(vec![(1400.0, 4), (900.0, 2), (0.0, 1)])
    );
    assert_eq!(skills.min_card_width, Some(260.0));
    assert_eq!(layout.contacts, None);
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = write_temp_config("folio_test_config_invalid.toml", "this is not valid TOML ][}{");

    let result = load_config_file(&path);
    fs::remove_file(&path).ok();

    match result {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let path = write_temp_config("folio_test_config_unknown.toml", "theme = \"monokai\"\n");

    let result = load_config_file(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

// ===== merge_config =====

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None).unwrap();
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.cell_width, DEFAULT_CELL_WIDTH);
    assert_eq!(resolved.layout, LayoutConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        cell_width: Some(9.0),
        no_color: Some(true),
        log_file_path: Some(PathBuf::from("/custom/path/to/app.log")),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file)).unwrap();
    assert_eq!(resolved.cell_width, 9.0);
    assert_eq!(resolved.cell_height, DEFAULT_CELL_HEIGHT);
    assert!(resolved.no_color);
    assert_eq!(
        resolved.log_file_path,
        PathBuf::from("/custom/path/to/app.log")
    );
}

#[test]
fn merge_config_applies_layout_overrides() {
    let config_file = ConfigFile {
        layout: Some(LayoutSection {
            footer_compact_threshold: Some(700.0),
            hero: Some(HeroSection {
                heading: Some((40.0, 90.0)),
                actions_per_row: Some((1, 3)),
                ..HeroSection::default()
            }),
            contacts: Some(GridSectionConfig {
                columns: Some(vec![(1000.0, 4), (0.0, 2)]),
                gap: Some(8.0),
                ..GridSectionConfig::default()
            }),
            skills: None,
        }),
        ..ConfigFile::default()
    };

    let layout = merge_config(Some(config_file)).unwrap().layout;
    assert_eq!(layout.footer_compact_threshold, 700.0);
    assert_eq!(layout.hero.heading, FontPair::new(40.0, 90.0));
    assert_eq!(layout.hero.subtitle, HeroSpec::default().subtitle);
    assert_eq!(layout.hero.actions_per_row, (1, 3));
    assert_eq!(*layout.contacts.columns.resolve(1100.0), 4);
    assert_eq!(*layout.contacts.columns.resolve(10.0), 2);
    assert_eq!(layout.contacts.gap, 8.0);
    assert_eq!(layout.contacts.min_card_width, 250.0);
    assert_eq!(layout.skills, SectionSpec::skills());
}

#[test]
fn merge_config_rejects_ascending_columns() {
    let config_file = ConfigFile {
        layout: Some(LayoutSection {
            skills: Some(GridSectionConfig {
                columns: Some(vec![(0.0, 1), (860.0, 2)]),
                ..GridSectionConfig::default()
            }),
            ..LayoutSection::default()
        }),
        ..ConfigFile::default()
    };

    match merge_config(Some(config_file)) {
        Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "layout.skills.columns"),
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn merge_config_rejects_empty_columns() {
    let config_file = ConfigFile {
        layout: Some(LayoutSection {
            contacts: Some(GridSectionConfig {
                columns: Some(Vec::new()),
                ..GridSectionConfig::default()
            }),
            ..LayoutSection::default()
        }),
        ..ConfigFile::default()
    };

    assert!(matches!(
        merge_config(Some(config_file)),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn merge_config_rejects_zero_columns() {
    let config_file = ConfigFile {
        layout: Some(LayoutSection {
            skills: Some(GridSectionConfig {
                columns: Some(vec![(860.0, 2), (0.0, 0)]),
                ..GridSectionConfig::default()
            }),
            ..LayoutSection::default()
        }),
        ..ConfigFile::default()
    };

    assert!(matches!(
        merge_config(Some(config_file)),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn merge_config_rejects_non_positive_cell_width() {
    let config_file = ConfigFile {
        cell_width: Some(0.0),
        ..ConfigFile::default()
    };

    match merge_config(Some(config_file)) {
        Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "cell_width"),
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn merge_config_rejects_zero_actions_per_row() {
    let config_file = ConfigFile {
        layout: Some(LayoutSection {
            hero: Some(HeroSection {
                actions_per_row: Some((0, 5)),
                ..HeroSection::default()
            }),
            ..LayoutSection::default()
        }),
        ..ConfigFile::default()
    };

    assert!(matches!(
        merge_config(Some(config_file)),
        Err(ConfigError::InvalidValue { .. })
    ));
}

// ===== env and CLI overrides =====

#[test]
#[serial(folio_env)]
fn env_overrides_cell_width_and_content() {
    env::set_var("FOLIO_CELL_WIDTH", "12.5");
    env::set_var("FOLIO_CONTENT", "/tmp/folio-content.toml");

    let config = apply_env_overrides(ResolvedConfig::default());

    env::remove_var("FOLIO_CELL_WIDTH");
    env::remove_var("FOLIO_CONTENT");

    let config = config.expect("valid env overrides");
    assert_eq!(config.cell_width, 12.5);
    assert_eq!(
        config.content_path,
        Some(PathBuf::from("/tmp/folio-content.toml"))
    );
}

#[test]
#[serial(folio_env)]
fn env_without_overrides_keeps_config() {
    env::remove_var("FOLIO_CELL_WIDTH");
    env::remove_var("FOLIO_CONTENT");

    let config = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(config, Ok(ResolvedConfig::default()));
}

#[test]
#[serial(folio_env)]
fn env_non_numeric_cell_width_is_rejected() {
    env::set_var("FOLIO_CELL_WIDTH", "wide");

    let result = apply_env_overrides(ResolvedConfig::default());

    env::remove_var("FOLIO_CELL_WIDTH");

    match result {
        Err(ConfigError::InvalidValue { field, reason }) => {
            assert_eq!(field, "FOLIO_CELL_WIDTH");
            assert!(reason.contains("wide"), "reason should quote the value: {reason}");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
#[serial(folio_env)]
fn env_non_positive_cell_width_is_rejected() {
    env::set_var("FOLIO_CELL_WIDTH", "-4");

    let result = apply_env_overrides(ResolvedConfig::default());

    env::remove_var("FOLIO_CELL_WIDTH");

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref field, .. }) if field == "FOLIO_CELL_WIDTH"
    ));
}

#[test]
#[serial(folio_env)]
fn load_with_precedence_prefers_explicit_path_over_env() {
    let explicit = write_temp_config("folio_test_precedence_explicit.toml", "cell_width = 6.0\n");
    let from_env = write_temp_config("folio_test_precedence_env.toml", "cell_width = 7.0\n");
    env::set_var("FOLIO_CONFIG", &from_env);

    let chosen = load_config_with_precedence(Some(explicit.clone()));
    let fallback = load_config_with_precedence(None);

    env::remove_var("FOLIO_CONFIG");
    fs::remove_file(&explicit).ok();
    fs::remove_file(&from_env).ok();

    assert_eq!(chosen.unwrap().unwrap().cell_width, Some(6.0));
    assert_eq!(fallback.unwrap().unwrap().cell_width, Some(7.0));
}

#[test]
fn cli_overrides_win() {
    let base = ResolvedConfig {
        cell_width: 9.0,
        content_path: Some(PathBuf::from("from-file.toml")),
        ..ResolvedConfig::default()
    };

    let config = apply_cli_overrides(
        base,
        Some(4.0),
        Some(PathBuf::from("from-cli.toml")),
        Some(true),
    );

    assert_eq!(config.cell_width, 4.0);
    assert_eq!(config.content_path, Some(PathBuf::from("from-cli.toml")));
    assert!(config.no_color);
}

#[test]
fn cli_overrides_absent_keep_values() {
    let base = ResolvedConfig {
        cell_width: 9.0,
        ..ResolvedConfig::default()
    };

    let config = apply_cli_overrides(base.clone(), None, None, None);
    assert_eq!(config, base);
}
