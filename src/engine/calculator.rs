// ==========================================
// 育肥场杠杆计算器 - 场景计算引擎
// ==========================================
// 职责: 单场景的增重/胴体/成本/收益率派生, 对比场景相对基准的增量
// 输入: ScenarioInput + EconomicParameters (+ 基准结果)
// 输出: ScenarioResult / IncrementalMetrics
// 红线: 纯函数, 无状态, 单次遍历; 非法输入返回错误而不是 NaN/Infinity
// ==========================================

use crate::config::ScalingProfile;
use crate::domain::{
    AdditiveProduct, EconomicParameters, HorizonMode, IncrementalMetrics, InputField,
    ScenarioInput, ScenarioKind, ScenarioResult, ARROBA_KG, DAYS_PER_MONTH,
    LEAN_ANIMAL_KG_PER_ARROBA,
};
use crate::engine::error::{
    Constraint, DegenerateComparisonError, DegenerateMetric, InvalidInputError,
};
use crate::engine::validation::{
    ensure_finite_result, require, validate_economics, validate_scenario_input,
};

// ==========================================
// 单场景计算
// ==========================================

/// 计算单个场景
///
/// # 参数
/// - `scenario`: 场景标识（用于错误定位）
/// - `input`: 场景输入
/// - `economics`: 共享经济参数
/// - `baseline`: 基准结果；None 表示当前即基准
///
/// # 返回
/// - Ok(ScenarioResult): 全部字段均为有限数
/// - Err(InvalidInputError): 指明违反约束的字段
///
/// # 说明
/// - 基准日饲养成本恒等于 base_daily_feeding_cost（不缩放、不加技术差价）
/// - 对比场景日饲养成本 = 采食量比 × base_daily_feeding_cost + 技术差价
pub fn compute_scenario(
    scenario: ScenarioKind,
    input: &ScenarioInput,
    economics: &EconomicParameters,
    baseline: Option<&ScenarioResult>,
) -> Result<ScenarioResult, InvalidInputError> {
    validate_scenario_input(scenario, input)?;
    validate_economics(scenario, economics)?;

    let initial = input.initial_live_weight_kg;
    let final_weight = input.final_live_weight_kg;
    let price = economics.arroba_sale_price;

    // ===== 增重与采食 =====
    let confinement_days = (final_weight - initial) / input.average_daily_gain_kg_per_day;
    let dry_matter_intake_kg_per_day =
        input.feed_intake_pct_of_bodyweight * input.mean_live_weight_kg();
    let carcass_kg = final_weight * input.carcass_yield_pct / 100.0;
    let carcass_units_produced = carcass_kg / ARROBA_KG - initial / LEAN_ANIMAL_KG_PER_ARROBA;

    // ===== 饲养成本 =====
    let daily_feeding_cost = match baseline {
        None => economics.base_daily_feeding_cost,
        Some(base) => {
            require(
                scenario,
                InputField::FeedIntakePctOfBodyweight,
                base.dry_matter_intake_kg_per_day,
                Constraint::NonZeroBaselineIntake,
                base.dry_matter_intake_kg_per_day != 0.0,
            )?;
            let intake_ratio = dry_matter_intake_kg_per_day / base.dry_matter_intake_kg_per_day;
            intake_ratio * economics.base_daily_feeding_cost + input.technology_differential_cost
        }
    };
    let total_period_feeding_cost = daily_feeding_cost * confinement_days;

    // ===== 收入与结果 =====
    let revenue = price * carcass_units_produced;
    let lean_animal_cost = price
        * (1.0 + economics.lean_animal_premium_pct / 100.0)
        * (initial / LEAN_ANIMAL_KG_PER_ARROBA);
    let net_result = revenue - total_period_feeding_cost - lean_animal_cost;

    // ===== 收益率 =====
    let period_return_rate = net_result / (price * final_weight);
    let monthly_return_rate =
        (1.0 + period_return_rate).powf(DAYS_PER_MONTH / confinement_days) - 1.0;

    // ===== 效率指标 =====
    require(
        scenario,
        InputField::CarcassUnitsProduced,
        carcass_units_produced,
        Constraint::NonZero,
        carcass_units_produced != 0.0,
    )?;
    let biological_efficiency =
        dry_matter_intake_kg_per_day * confinement_days / carcass_units_produced;
    let carcass_daily_gain_kg = (carcass_kg - initial / 2.0) / confinement_days;
    let final_weight_arrobas = final_weight / ARROBA_KG;

    let finite = |field: InputField, value: f64| ensure_finite_result(scenario, field, value);
    let result = ScenarioResult {
        confinement_days: finite(InputField::ConfinementDays, confinement_days)?,
        dry_matter_intake_kg_per_day,
        carcass_units_produced,
        daily_feeding_cost: finite(InputField::DailyFeedingCost, daily_feeding_cost)?,
        total_period_feeding_cost,
        revenue,
        lean_animal_cost,
        net_result: finite(InputField::NetResult, net_result)?,
        period_return_rate: finite(InputField::PeriodReturnRate, period_return_rate)?,
        monthly_return_rate: finite(InputField::MonthlyReturnRate, monthly_return_rate)?,
        biological_efficiency: finite(InputField::BiologicalEfficiency, biological_efficiency)?,
        carcass_daily_gain_kg,
        final_weight_arrobas,
    };

    tracing::trace!(
        scenario = %scenario,
        days = result.confinement_days,
        arrobas = result.carcass_units_produced,
        net = result.net_result,
        "场景计算完成"
    );

    Ok(result)
}

// ==========================================
// 增量指标
// ==========================================

/// 计算对比场景相对基准的增量指标
///
/// # 返回
/// - Err(DegenerateComparisonError):
///   - 基准净结果为 0（利润增幅无定义）
///   - 增加的 arroba 为 0（单位增量成本无定义）
///   - 任一增量指标不是有限数
pub fn compute_incremental_metrics(
    scenario: ScenarioKind,
    variant: &ScenarioResult,
    baseline: &ScenarioResult,
    arroba_sale_price: f64,
) -> Result<IncrementalMetrics, DegenerateComparisonError> {
    if baseline.net_result == 0.0 {
        return Err(DegenerateComparisonError {
            scenario,
            metric: DegenerateMetric::ProfitIncrementPct,
        });
    }

    let extra_carcass_units = variant.carcass_units_produced - baseline.carcass_units_produced;
    if extra_carcass_units == 0.0 {
        return Err(DegenerateComparisonError {
            scenario,
            metric: DegenerateMetric::ExtraCostPerCarcassUnit,
        });
    }

    let extra_cost = variant.total_period_feeding_cost - baseline.total_period_feeding_cost;
    let finite = |metric: DegenerateMetric, value: f64| {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(DegenerateComparisonError { scenario, metric })
        }
    };

    // 基准净结果接近 0 时利润增幅可能溢出为 Infinity
    Ok(IncrementalMetrics {
        profit_increment_pct: finite(
            DegenerateMetric::ProfitIncrementPct,
            (variant.net_result / baseline.net_result - 1.0) * 100.0,
        )?,
        extra_carcass_units: finite(DegenerateMetric::ExtraCarcassUnits, extra_carcass_units)?,
        extra_revenue: finite(
            DegenerateMetric::ExtraRevenue,
            extra_carcass_units * arroba_sale_price,
        )?,
        extra_cost: finite(DegenerateMetric::ExtraCost, extra_cost)?,
        extra_profit: finite(
            DegenerateMetric::ExtraProfit,
            variant.net_result - baseline.net_result,
        )?,
        extra_cost_per_carcass_unit: finite(
            DegenerateMetric::ExtraCostPerCarcassUnit,
            extra_cost / extra_carcass_units,
        )?,
    })
}

// ==========================================
// 对比场景输入派生
// ==========================================

/// 由基准实测值和缩放配置派生对比场景输入
///
/// # 参数
/// - `baseline_input`: 基准输入
/// - `baseline_result`: 基准结果（SharedBaseline 口径需要基准天数）
/// - `baseline_product`: 基准添加剂（技术差价以其为零点）
/// - `profile`: 对比场景缩放配置
/// - `mode`: 时间口径
pub fn derive_variant_input(
    baseline_input: &ScenarioInput,
    baseline_result: &ScenarioResult,
    baseline_product: &AdditiveProduct,
    profile: &ScalingProfile,
    mode: HorizonMode,
) -> ScenarioInput {
    let average_daily_gain_kg_per_day =
        baseline_input.average_daily_gain_kg_per_day * profile.gmd_multiplier;

    let final_live_weight_kg = match mode {
        HorizonMode::ScenarioSpecific => baseline_input.final_live_weight_kg,
        HorizonMode::SharedBaseline => {
            baseline_input.initial_live_weight_kg
                + average_daily_gain_kg_per_day * baseline_result.confinement_days
        }
    };

    ScenarioInput {
        initial_live_weight_kg: baseline_input.initial_live_weight_kg,
        final_live_weight_kg,
        average_daily_gain_kg_per_day,
        carcass_yield_pct: baseline_input.carcass_yield_pct * profile.carcass_yield_multiplier,
        feed_intake_pct_of_bodyweight: baseline_input.feed_intake_pct_of_bodyweight
            * profile.feed_intake_multiplier,
        technology_differential_cost: profile.product.differential_over(baseline_product),
    }
}
