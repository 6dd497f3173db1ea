// ==========================================
// 育肥场杠杆计算器 - 引擎层
// ==========================================
// 职责: 场景计算、增量指标、对比编排
// 红线: 引擎不依赖任何渲染/界面框架, 所有计算为纯函数
// ==========================================

pub mod calculator;
pub mod comparison;
pub mod error;
pub mod validation;

// 重导出核心引擎
pub use calculator::{compute_incremental_metrics, compute_scenario, derive_variant_input};
pub use comparison::{BaselineInsights, ComparisonEngine, ComparisonReport, ScenarioOutcome};
pub use error::{
    CalculatorError, CalculatorResult, Constraint, DegenerateComparisonError, DegenerateMetric,
    InvalidInputError,
};
pub use validation::{ensure_finite_result, validate_economics, validate_scenario_input};
