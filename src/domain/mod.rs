// ==========================================
// 育肥场杠杆计算器 - 领域模型层
// ==========================================
// 职责: 定义场景输入、经济参数、计算结果等领域实体
// 红线: 不含计算逻辑, 不含任何渲染/界面依赖
// ==========================================

pub mod scenario;
pub mod types;

// 重导出核心类型
pub use scenario::{
    AdditiveProduct, EconomicParameters, IncrementalMetrics, ScenarioInput, ScenarioResult,
    ARROBA_KG, DAYS_PER_MONTH, LEAN_ANIMAL_KG_PER_ARROBA,
};
pub use types::{variant_letters, HorizonMode, InputField, ScenarioKind};
