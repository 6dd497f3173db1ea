// ==========================================
// 育肥场杠杆计算器 - 领域类型定义
// ==========================================
// 场景标识、时间口径、输入字段枚举
// 红线: 控制流不依赖字符串匹配 (不再使用 "Molecula 1" 这类名称判断基准)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 场景类型 (Scenario Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioKind {
    /// 基准场景 (实测数据)
    Baseline,
    /// 对比场景, index 从 0 开始 (0 = Variant A)
    Variant { index: usize },
}

impl ScenarioKind {
    pub fn is_baseline(&self) -> bool {
        matches!(self, ScenarioKind::Baseline)
    }

    /// 短代码: baseline / variant_a / variant_b ...
    pub fn code(&self) -> String {
        match self {
            ScenarioKind::Baseline => "baseline".to_string(),
            ScenarioKind::Variant { index } => {
                format!("variant_{}", variant_letters(*index).to_ascii_lowercase())
            }
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioKind::Baseline => write!(f, "Baseline"),
            ScenarioKind::Variant { index } => write!(f, "Variant {}", variant_letters(*index)),
        }
    }
}

/// 对比场景字母编号（电子表格列名风格）
///
/// 0 -> "A", 25 -> "Z", 26 -> "AA", 27 -> "AB" ...
pub fn variant_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

// ==========================================
// 时间口径 (Horizon Mode)
// ==========================================
// 对比场景的育肥天数口径
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizonMode {
    /// 各场景按自身 GMD 计算天数, 出栏体重沿用基准 (默认口径)
    #[default]
    ScenarioSpecific,
    /// 对比场景沿用基准天数, 出栏体重 = 入栏体重 + GMD × 基准天数
    SharedBaseline,
}

impl HorizonMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizonMode::ScenarioSpecific => "scenario_specific",
            HorizonMode::SharedBaseline => "shared_baseline",
        }
    }
}

impl fmt::Display for HorizonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HorizonMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scenario_specific" | "scenario-specific" => Ok(HorizonMode::ScenarioSpecific),
            "shared_baseline" | "shared-baseline" => Ok(HorizonMode::SharedBaseline),
            other => Err(format!("未知时间口径: {}", other)),
        }
    }
}

// ==========================================
// 输入/派生字段 (Input Field)
// ==========================================
// 错误信息必须指明具体字段, i18n key 为 field.<as_str>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    InitialLiveWeightKg,
    FinalLiveWeightKg,
    AverageDailyGainKgPerDay,
    CarcassYieldPct,
    FeedIntakePctOfBodyweight,
    TechnologyDifferentialCost,
    BaseDailyFeedingCost,
    ArrobaSalePrice,
    LeanAnimalPremiumPct,
    CarcassUnitsProduced,
    ConfinementDays,
    DailyFeedingCost,
    NetResult,
    PeriodReturnRate,
    MonthlyReturnRate,
    BiologicalEfficiency,
}

impl InputField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::InitialLiveWeightKg => "initial_live_weight_kg",
            InputField::FinalLiveWeightKg => "final_live_weight_kg",
            InputField::AverageDailyGainKgPerDay => "average_daily_gain_kg_per_day",
            InputField::CarcassYieldPct => "carcass_yield_pct",
            InputField::FeedIntakePctOfBodyweight => "feed_intake_pct_of_bodyweight",
            InputField::TechnologyDifferentialCost => "technology_differential_cost",
            InputField::BaseDailyFeedingCost => "base_daily_feeding_cost",
            InputField::ArrobaSalePrice => "arroba_sale_price",
            InputField::LeanAnimalPremiumPct => "lean_animal_premium_pct",
            InputField::CarcassUnitsProduced => "carcass_units_produced",
            InputField::ConfinementDays => "confinement_days",
            InputField::DailyFeedingCost => "daily_feeding_cost",
            InputField::NetResult => "net_result",
            InputField::PeriodReturnRate => "period_return_rate",
            InputField::MonthlyReturnRate => "monthly_return_rate",
            InputField::BiologicalEfficiency => "biological_efficiency",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
