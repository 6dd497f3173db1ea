// ==========================================
// 育肥场杠杆计算器 - 引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 不向调用方输出 NaN / Infinity, 违反约束时立即返回带字段的错误
// ==========================================

use crate::domain::{InputField, ScenarioKind};
use std::fmt;
use thiserror::Error;

// ==========================================
// Constraint - 被违反的约束
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// 必须为有限数
    Finite,
    /// 必须 >= 0
    NonNegative,
    /// 必须 > 0
    Positive,
    /// 出栏体重不得低于入栏体重
    NotBelowInitialWeight,
    /// 出栏体重必须高于入栏体重 (育肥天数为 0 时月收益率无定义)
    AboveInitialWeight,
    /// 必须在 0~100 之间
    Percentage,
    /// 基准采食量为 0, 无法按比例缩放饲养成本
    NonZeroBaselineIntake,
    /// 不能为 0 (作为分母)
    NonZero,
    /// 计算结果不是有限数
    FiniteResult,
}

impl Constraint {
    /// i18n key 后缀 (constraint.<as_str>)
    pub fn as_str(&self) -> &'static str {
        match self {
            Constraint::Finite => "finite",
            Constraint::NonNegative => "non_negative",
            Constraint::Positive => "positive",
            Constraint::NotBelowInitialWeight => "not_below_initial_weight",
            Constraint::AboveInitialWeight => "above_initial_weight",
            Constraint::Percentage => "percentage",
            Constraint::NonZeroBaselineIntake => "non_zero_baseline_intake",
            Constraint::NonZero => "non_zero",
            Constraint::FiniteResult => "finite_result",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Constraint::Finite => "必须为有限数",
            Constraint::NonNegative => "不能为负数",
            Constraint::Positive => "必须大于 0",
            Constraint::NotBelowInitialWeight => "不能低于入栏体重",
            Constraint::AboveInitialWeight => "必须高于入栏体重",
            Constraint::Percentage => "必须在 0~100 之间",
            Constraint::NonZeroBaselineIntake => "基准采食量为 0",
            Constraint::NonZero => "不能为 0",
            Constraint::FiniteResult => "计算结果无效",
        };
        f.write_str(text)
    }
}

// ==========================================
// InvalidInputError - 输入无效
// ==========================================
#[derive(Error, Debug, Clone, PartialEq)]
#[error("场景 {scenario} 输入无效: {field} = {value} ({constraint})")]
pub struct InvalidInputError {
    pub scenario: ScenarioKind,
    pub field: InputField,
    pub value: f64,
    pub constraint: Constraint,
}

impl InvalidInputError {
    pub fn new(
        scenario: ScenarioKind,
        field: InputField,
        value: f64,
        constraint: Constraint,
    ) -> Self {
        Self {
            scenario,
            field,
            value,
            constraint,
        }
    }
}

// ==========================================
// DegenerateComparisonError - 对比退化 (增量分母为 0)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateMetric {
    /// 基准净结果为 0 (或溢出), 利润增幅无定义
    ProfitIncrementPct,
    ExtraCarcassUnits,
    ExtraRevenue,
    ExtraCost,
    ExtraProfit,
    /// 增加的 arroba 为 0, 单位增量成本无定义
    ExtraCostPerCarcassUnit,
}

impl DegenerateMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            DegenerateMetric::ProfitIncrementPct => "profit_increment_pct",
            DegenerateMetric::ExtraCarcassUnits => "extra_carcass_units",
            DegenerateMetric::ExtraRevenue => "extra_revenue",
            DegenerateMetric::ExtraCost => "extra_cost",
            DegenerateMetric::ExtraProfit => "extra_profit",
            DegenerateMetric::ExtraCostPerCarcassUnit => "extra_cost_per_carcass_unit",
        }
    }
}

impl fmt::Display for DegenerateMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("场景 {scenario} 无法与基准比较: {metric} 无定义")]
pub struct DegenerateComparisonError {
    pub scenario: ScenarioKind,
    pub metric: DegenerateMetric,
}

// ==========================================
// CalculatorError - 计算流程统一错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    DegenerateComparison(#[from] DegenerateComparisonError),
}

impl CalculatorError {
    /// 出错的场景
    pub fn scenario(&self) -> ScenarioKind {
        match self {
            CalculatorError::InvalidInput(e) => e.scenario,
            CalculatorError::DegenerateComparison(e) => e.scenario,
        }
    }
}

pub type CalculatorResult<T> = Result<T, CalculatorError>;
