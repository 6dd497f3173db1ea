// ==========================================
// 育肥场杠杆计算器 - 场景实体
// ==========================================
// 输入: ScenarioInput (每个场景一份) + EconomicParameters (全场景共享)
// 输出: ScenarioResult (每个场景一份) + IncrementalMetrics (对比场景相对基准)
// 生命周期: 每次计算临时创建, 不持久化
// ==========================================

use serde::{Deserialize, Serialize};

/// 1 arroba = 15 kg 胴体
pub const ARROBA_KG: f64 = 15.0;

/// 架子牛按 30 kg 活重折 1 arroba (即 50% 屠宰率)
pub const LEAN_ANIMAL_KG_PER_ARROBA: f64 = 30.0;

/// 月收益率折算使用的平均月天数
pub const DAYS_PER_MONTH: f64 = 30.4;

// ==========================================
// ScenarioInput - 场景输入
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// 入栏活重 (kg)
    pub initial_live_weight_kg: f64,
    /// 出栏活重 (kg)
    pub final_live_weight_kg: f64,
    /// 日增重 GMD (kg/天)
    pub average_daily_gain_kg_per_day: f64,
    /// 胴体屠宰率 (%, 0~100)
    pub carcass_yield_pct: f64,
    /// 干物质采食量占体重比例 (小数, 0.0231 = 2.31%PV)
    pub feed_intake_pct_of_bodyweight: f64,
    /// 技术差价 (R$/头/天), 基准恒为 0
    #[serde(default)]
    pub technology_differential_cost: f64,
}

impl ScenarioInput {
    /// 平均体重 (入栏与出栏的均值)
    pub fn mean_live_weight_kg(&self) -> f64 {
        (self.initial_live_weight_kg + self.final_live_weight_kg) / 2.0
    }
}

// ==========================================
// EconomicParameters - 经济参数 (全场景共享)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicParameters {
    /// 基准日饲养成本 (R$/头/天)
    pub base_daily_feeding_cost: f64,
    /// arroba 售价 (R$/@)
    pub arroba_sale_price: f64,
    /// 架子牛溢价 (%)
    pub lean_animal_premium_pct: f64,
}

impl Default for EconomicParameters {
    fn default() -> Self {
        Self {
            base_daily_feeding_cost: 15.0,
            arroba_sale_price: 340.0,
            lean_animal_premium_pct: 5.0,
        }
    }
}

// ==========================================
// AdditiveProduct - 饲料添加剂 (分子)
// ==========================================
// 技术差价 = 对比场景产品日成本 - 基准产品日成本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditiveProduct {
    pub name: String,
    /// 产品单价 (R$/kg), 仅用于展示
    #[serde(default)]
    pub price: f64,
    /// 每头每天成本 (R$/头/天)
    pub cost_per_head_day: f64,
}

impl AdditiveProduct {
    pub fn new(name: impl Into<String>, price: f64, cost_per_head_day: f64) -> Self {
        Self {
            name: name.into(),
            price,
            cost_per_head_day,
        }
    }

    /// 相对基准产品的技术差价
    pub fn differential_over(&self, baseline: &AdditiveProduct) -> f64 {
        self.cost_per_head_day - baseline.cost_per_head_day
    }
}

// ==========================================
// ScenarioResult - 场景计算结果 (不可变)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// 育肥天数
    pub confinement_days: f64,
    /// 干物质采食量 (kg/天)
    pub dry_matter_intake_kg_per_day: f64,
    /// 产出 arroba 数 (@/头)
    pub carcass_units_produced: f64,
    /// 日饲养成本 (含技术差价, R$/头/天)
    pub daily_feeding_cost: f64,
    /// 全期饲养成本 (R$/头)
    pub total_period_feeding_cost: f64,
    /// 销售收入 (R$/头)
    pub revenue: f64,
    /// 架子牛成本 (R$/头)
    pub lean_animal_cost: f64,
    /// 净结果 (R$/头)
    pub net_result: f64,
    /// 期间收益率 (小数)
    pub period_return_rate: f64,
    /// 月收益率 (小数, 复利折算)
    pub monthly_return_rate: f64,
    /// 生物效率 (kg 干物质 / @)
    pub biological_efficiency: f64,
    /// 日胴体增重 GDC (kg/天)
    pub carcass_daily_gain_kg: f64,
    /// 出栏体重折 arroba (@/头)
    pub final_weight_arrobas: f64,
}

// ==========================================
// IncrementalMetrics - 对比场景相对基准的增量
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncrementalMetrics {
    /// 利润增幅 (%)
    pub profit_increment_pct: f64,
    /// 增加的 arroba 数
    pub extra_carcass_units: f64,
    /// 增加的收入 (R$)
    pub extra_revenue: f64,
    /// 增加的饲养成本 (R$)
    pub extra_cost: f64,
    /// 增加的利润 (R$)
    pub extra_profit: f64,
    /// 每增加 1 @ 的成本 (R$/@)
    pub extra_cost_per_carcass_unit: f64,
}
