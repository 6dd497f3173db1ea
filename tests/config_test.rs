// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证配置读取、默认回退、模板写出功能的正确性
// ==========================================

mod test_helpers;

use feedlot_leverage::config::{CalculatorConfig, ConfigError, ConfigManager};
use feedlot_leverage::domain::HorizonMode;
use tempfile::TempDir;
use test_helpers::{write_config_file, write_raw_file};

#[test]
fn test_load_written_config() {
    let mut config = CalculatorConfig::default();
    config.economics.arroba_sale_price = 355.0;
    config.horizon_mode = HorizonMode::SharedBaseline;
    config.locale = Some("en".to_string());

    let (_dir, path) = write_config_file(&config).expect("Failed to write config");
    let loaded = ConfigManager::new(&path).load().expect("Failed to load config");

    assert_eq!(loaded, config);
}

#[test]
fn test_partial_config_uses_defaults() {
    let json = r#"{
        "baseline": {
            "label": "Lote 7",
            "initial_live_weight_kg": 400.0,
            "final_live_weight_kg": 580.0,
            "average_daily_gain_kg_per_day": 1.6,
            "carcass_yield_pct": 55.0,
            "feed_intake_pct_of_bodyweight": 0.024,
            "product": { "name": "Molecula 1", "cost_per_head_day": 1.23 }
        }
    }"#;
    let (_dir, path) = write_raw_file("config.json", json).unwrap();

    let config = ConfigManager::new(&path).load().unwrap();
    assert_eq!(config.baseline.label, "Lote 7");
    assert_eq!(config.economics.arroba_sale_price, 340.0);
    assert_eq!(config.variants.len(), 2);
    assert_eq!(config.horizon_mode, HorizonMode::ScenarioSpecific);
    assert!(config.locale.is_none());
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::new(dir.path().join("absent.json"));

    assert!(matches!(manager.load(), Err(ConfigError::Io { .. })));
    // load_or_default 仅在文件缺失时回退
    assert_eq!(manager.load_or_default().unwrap(), CalculatorConfig::default());
}

#[test]
fn test_malformed_file_is_not_silently_replaced() {
    let (_dir, path) = write_raw_file("config.json", "{ not json").unwrap();
    let manager = ConfigManager::new(&path);

    assert!(matches!(manager.load_or_default(), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_empty_variants_rejected() {
    let mut config = CalculatorConfig::default();
    config.variants.clear();
    let (_dir, path) = write_config_file(&config).unwrap();

    assert!(matches!(
        ConfigManager::new(&path).load(),
        Err(ConfigError::NoVariants)
    ));
}

#[test]
fn test_invalid_multiplier_rejected() {
    let mut config = CalculatorConfig::default();
    config.variants[1].gmd_multiplier = -1.0;
    let (_dir, path) = write_config_file(&config).unwrap();

    match ConfigManager::new(&path).load() {
        Err(ConfigError::InvalidMultiplier { label, value, .. }) => {
            assert_eq!(label, "Molecula 3");
            assert_eq!(value, -1.0);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_write_template_does_not_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let manager = ConfigManager::new(&path);

    assert!(manager.write_template().unwrap());
    assert!(path.exists());
    assert_eq!(manager.load().unwrap(), CalculatorConfig::default());

    assert!(!manager.write_template().unwrap());
}
