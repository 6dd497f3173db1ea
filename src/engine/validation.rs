// ==========================================
// 育肥场杠杆计算器 - 输入校验
// ==========================================
// 职责: 在任何除法之前校验输入, 违反约束时返回指明字段的 InvalidInputError
// ==========================================

use crate::domain::{EconomicParameters, InputField, ScenarioInput, ScenarioKind};
use crate::engine::error::{Constraint, InvalidInputError};

/// 校验场景输入
///
/// 校验顺序: 有限性 -> 体重 -> GMD -> 屠宰率 -> 采食量
pub fn validate_scenario_input(
    scenario: ScenarioKind,
    input: &ScenarioInput,
) -> Result<(), InvalidInputError> {
    let fields = [
        (InputField::InitialLiveWeightKg, input.initial_live_weight_kg),
        (InputField::FinalLiveWeightKg, input.final_live_weight_kg),
        (InputField::AverageDailyGainKgPerDay, input.average_daily_gain_kg_per_day),
        (InputField::CarcassYieldPct, input.carcass_yield_pct),
        (InputField::FeedIntakePctOfBodyweight, input.feed_intake_pct_of_bodyweight),
        (InputField::TechnologyDifferentialCost, input.technology_differential_cost),
    ];
    for (field, value) in fields {
        require(scenario, field, value, Constraint::Finite, value.is_finite())?;
    }

    let initial = input.initial_live_weight_kg;
    let final_weight = input.final_live_weight_kg;

    require(
        scenario,
        InputField::InitialLiveWeightKg,
        initial,
        Constraint::NonNegative,
        initial >= 0.0,
    )?;
    require(
        scenario,
        InputField::AverageDailyGainKgPerDay,
        input.average_daily_gain_kg_per_day,
        Constraint::Positive,
        input.average_daily_gain_kg_per_day > 0.0,
    )?;
    require(
        scenario,
        InputField::FinalLiveWeightKg,
        final_weight,
        Constraint::NotBelowInitialWeight,
        final_weight >= initial,
    )?;
    require(
        scenario,
        InputField::FinalLiveWeightKg,
        final_weight,
        Constraint::AboveInitialWeight,
        final_weight > initial,
    )?;
    require(
        scenario,
        InputField::CarcassYieldPct,
        input.carcass_yield_pct,
        Constraint::Percentage,
        (0.0..=100.0).contains(&input.carcass_yield_pct),
    )?;
    require(
        scenario,
        InputField::FeedIntakePctOfBodyweight,
        input.feed_intake_pct_of_bodyweight,
        Constraint::NonNegative,
        input.feed_intake_pct_of_bodyweight >= 0.0,
    )?;

    Ok(())
}

/// 校验经济参数
pub fn validate_economics(
    scenario: ScenarioKind,
    economics: &EconomicParameters,
) -> Result<(), InvalidInputError> {
    let fields = [
        (InputField::BaseDailyFeedingCost, economics.base_daily_feeding_cost),
        (InputField::ArrobaSalePrice, economics.arroba_sale_price),
        (InputField::LeanAnimalPremiumPct, economics.lean_animal_premium_pct),
    ];
    for (field, value) in fields {
        require(scenario, field, value, Constraint::Finite, value.is_finite())?;
    }

    require(
        scenario,
        InputField::BaseDailyFeedingCost,
        economics.base_daily_feeding_cost,
        Constraint::NonNegative,
        economics.base_daily_feeding_cost >= 0.0,
    )?;
    // 期间收益率以 售价 × 出栏体重 为分母
    require(
        scenario,
        InputField::ArrobaSalePrice,
        economics.arroba_sale_price,
        Constraint::Positive,
        economics.arroba_sale_price > 0.0,
    )?;

    Ok(())
}

/// 派生值必须为有限数
pub fn ensure_finite_result(
    scenario: ScenarioKind,
    field: InputField,
    value: f64,
) -> Result<f64, InvalidInputError> {
    require(scenario, field, value, Constraint::FiniteResult, value.is_finite())?;
    Ok(value)
}

/// 条件不成立时构造错误
pub(crate) fn require(
    scenario: ScenarioKind,
    field: InputField,
    value: f64,
    constraint: Constraint,
    ok: bool,
) -> Result<(), InvalidInputError> {
    if ok {
        Ok(())
    } else {
        Err(InvalidInputError::new(scenario, field, value, constraint))
    }
}
