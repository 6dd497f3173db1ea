// ==========================================
// 育肥场杠杆计算器 - 核心库
// ==========================================
// Calculadora de Alavancagem: 育肥场 (confinamento) 基准场景
// 与添加剂对比场景的经济性对比
// 系统定位: 决策支持 (纯计算, 无持久化)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计算与对比
pub mod engine;

// 配置层 - 计算配置
pub mod config;

// 报表层 - 文本/CSV
pub mod report;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AdditiveProduct, EconomicParameters, HorizonMode, IncrementalMetrics, InputField,
    ScenarioInput, ScenarioKind, ScenarioResult,
};

// 引擎
pub use engine::{
    compute_incremental_metrics, compute_scenario, derive_variant_input, CalculatorError,
    ComparisonEngine, ComparisonReport, DegenerateComparisonError, InvalidInputError,
    ScenarioOutcome,
};

// 配置
pub use config::{BaselineConfig, CalculatorConfig, ConfigManager, ScalingProfile};

// ==========================================
// 系统常量
// ==========================================

/// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 系统名称
pub const APP_NAME: &str = "Calculadora de Alavancagem";
