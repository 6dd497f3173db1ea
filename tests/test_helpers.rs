// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的场景输入、配置文件、近似断言等功能
// ==========================================

#![allow(dead_code)]

use feedlot_leverage::config::CalculatorConfig;
use feedlot_leverage::domain::{EconomicParameters, ScenarioInput};
use std::error::Error;
use std::fs;
use tempfile::TempDir;

/// 浮点比较容差
pub const EPSILON: f64 = 1e-6;

/// 近似相等断言
pub fn assert_approx(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

/// 实测基准输入: 390 -> 560 kg, GMD 1.551
pub fn observed_baseline_input() -> ScenarioInput {
    ScenarioInput {
        initial_live_weight_kg: 390.0,
        final_live_weight_kg: 560.0,
        average_daily_gain_kg_per_day: 1.551,
        carcass_yield_pct: 54.89,
        feed_intake_pct_of_bodyweight: 0.0231,
        technology_differential_cost: 0.0,
    }
}

/// 默认经济参数: 15 R$/cab/dia, 340 R$/@, 5% 溢价
pub fn default_economics() -> EconomicParameters {
    EconomicParameters {
        base_daily_feeding_cost: 15.0,
        arroba_sale_price: 340.0,
        lean_animal_premium_pct: 5.0,
    }
}

/// 创建临时目录并写入配置文件
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - PathBuf: 配置文件路径
pub fn write_config_file(
    config: &CalculatorConfig,
) -> Result<(TempDir, std::path::PathBuf), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.json");
    fs::write(&path, serde_json::to_string_pretty(config)?)?;
    Ok((dir, path))
}

/// 写入原始文本（用于格式错误用例）
pub fn write_raw_file(
    name: &str,
    content: &str,
) -> Result<(TempDir, std::path::PathBuf), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok((dir, path))
}
