// ==========================================
// 育肥场杠杆计算器 - 场景对比编排器
// ==========================================
// 用途: 基准 + N 个对比场景的计算顺序编排
// 流程: 基准计算 -> (派生对比输入 -> 对比计算 -> 增量指标) × N
// 输出: 有序结果列表, 基准在前, 对比场景按配置顺序
// ==========================================

use crate::config::{BaselineConfig, CalculatorConfig, ScalingProfile};
use crate::domain::{
    AdditiveProduct, EconomicParameters, HorizonMode, IncrementalMetrics, ScenarioInput,
    ScenarioKind, ScenarioResult,
};
use crate::engine::calculator::{
    compute_incremental_metrics, compute_scenario, derive_variant_input,
};
use crate::engine::error::{CalculatorError, CalculatorResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

// ==========================================
// ScenarioOutcome - 单场景结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub kind: ScenarioKind,
    pub label: String,
    pub product: AdditiveProduct,
    pub input: ScenarioInput,
    pub result: ScenarioResult,
    /// 基准为 None
    pub incremental: Option<IncrementalMetrics>,
}

// ==========================================
// BaselineInsights - 基准核心指标
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineInsights {
    pub confinement_days: f64,
    /// GDC (kg/天)
    pub carcass_daily_gain_kg: f64,
    pub carcass_units_produced: f64,
    /// 基准技术差价恒为 0
    pub technology_differential_cost: f64,
}

impl BaselineInsights {
    fn from_result(result: &ScenarioResult) -> Self {
        Self {
            confinement_days: result.confinement_days,
            carcass_daily_gain_kg: result.carcass_daily_gain_kg,
            carcass_units_produced: result.carcass_units_produced,
            technology_differential_cost: 0.0,
        }
    }
}

// ==========================================
// ComparisonReport - 对比报告
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub horizon_mode: HorizonMode,
    pub economics: EconomicParameters,
    pub insights: BaselineInsights,
    /// 基准在前, 之后按配置顺序
    pub outcomes: Vec<ScenarioOutcome>,
}

impl ComparisonReport {
    pub fn baseline(&self) -> &ScenarioOutcome {
        &self.outcomes[0]
    }

    pub fn variants(&self) -> &[ScenarioOutcome] {
        &self.outcomes[1..]
    }
}

// ==========================================
// ComparisonEngine - 对比编排器
// ==========================================
// 红线: 无状态引擎, 基准结果以参数显式传入, 不使用共享可变字典
pub struct ComparisonEngine;

impl ComparisonEngine {
    pub fn new() -> Self {
        Self
    }

    /// 按完整配置执行对比
    pub fn run(&self, config: &CalculatorConfig) -> CalculatorResult<ComparisonReport> {
        self.compare(
            &config.baseline,
            &config.economics,
            &config.variants,
            config.horizon_mode,
        )
    }

    /// 执行对比
    ///
    /// # 参数
    /// - `baseline`: 基准实测值与产品
    /// - `economics`: 共享经济参数
    /// - `variants`: 对比场景缩放配置
    /// - `mode`: 时间口径
    ///
    /// # 返回
    /// - Ok(ComparisonReport): outcomes[0] 为基准
    /// - Err(CalculatorError): 第一个失败的场景（不跳过、不重试）
    pub fn compare(
        &self,
        baseline: &BaselineConfig,
        economics: &EconomicParameters,
        variants: &[ScalingProfile],
        mode: HorizonMode,
    ) -> CalculatorResult<ComparisonReport> {
        info!(
            baseline = %baseline.label,
            variants_count = variants.len(),
            horizon_mode = %mode,
            "开始场景对比"
        );

        // ==========================================
        // 步骤1: 基准
        // ==========================================
        let baseline_input = baseline.to_input();
        let baseline_result =
            compute_scenario(ScenarioKind::Baseline, &baseline_input, economics, None)
                .map_err(|e| reject(CalculatorError::from(e)))?;
        debug!(
            days = baseline_result.confinement_days,
            arrobas = baseline_result.carcass_units_produced,
            net_result = baseline_result.net_result,
            "基准计算完成"
        );

        let mut outcomes = Vec::with_capacity(variants.len() + 1);
        outcomes.push(ScenarioOutcome {
            kind: ScenarioKind::Baseline,
            label: baseline.label.clone(),
            product: baseline.product.clone(),
            input: baseline_input,
            result: baseline_result,
            incremental: None,
        });

        // ==========================================
        // 步骤2: 对比场景
        // ==========================================
        for (index, profile) in variants.iter().enumerate() {
            let kind = ScenarioKind::Variant { index };
            let input = derive_variant_input(
                &baseline_input,
                &baseline_result,
                &baseline.product,
                profile,
                mode,
            );

            let result = compute_scenario(kind, &input, economics, Some(&baseline_result))
                .map_err(|e| reject(CalculatorError::from(e)))?;
            let incremental = compute_incremental_metrics(
                kind,
                &result,
                &baseline_result,
                economics.arroba_sale_price,
            )
            .map_err(|e| reject(CalculatorError::from(e)))?;

            debug!(
                scenario = %kind,
                label = %profile.label,
                days = result.confinement_days,
                arrobas = result.carcass_units_produced,
                extra_profit = incremental.extra_profit,
                "对比场景计算完成"
            );

            outcomes.push(ScenarioOutcome {
                kind,
                label: profile.label.clone(),
                product: profile.product.clone(),
                input,
                result,
                incremental: Some(incremental),
            });
        }

        let report = ComparisonReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            horizon_mode: mode,
            economics: *economics,
            insights: BaselineInsights::from_result(&baseline_result),
            outcomes,
        };

        info!(
            report_id = %report.report_id,
            scenarios = report.outcomes.len(),
            "场景对比完成"
        );

        Ok(report)
    }
}

impl Default for ComparisonEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 记录被拒绝的场景后原样返回错误
fn reject(err: CalculatorError) -> CalculatorError {
    warn!(scenario = %err.scenario(), error = %err, "场景被拒绝");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InputField;

    #[test]
    fn test_default_config_produces_ordered_outcomes() {
        let report = ComparisonEngine::new()
            .run(&CalculatorConfig::default())
            .unwrap();

        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.baseline().kind, ScenarioKind::Baseline);
        assert_eq!(report.baseline().label, "Molecula 1");
        assert!(report.baseline().incremental.is_none());

        let variants = report.variants();
        assert_eq!(variants[0].kind, ScenarioKind::Variant { index: 0 });
        assert_eq!(variants[1].kind, ScenarioKind::Variant { index: 1 });
        assert!(variants.iter().all(|v| v.incremental.is_some()));
        assert_eq!(report.insights.technology_differential_cost, 0.0);
        assert_eq!(
            report.insights.confinement_days,
            report.baseline().result.confinement_days
        );
    }

    #[test]
    fn test_report_serializes_with_uuid() {
        let report = ComparisonEngine::new()
            .run(&CalculatorConfig::default())
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        let id = json["report_id"].as_str().unwrap();
        assert_eq!(Uuid::parse_str(id).unwrap(), report.report_id);

        let back: ComparisonReport = serde_json::from_value(json).unwrap();
        assert_eq!(back.report_id, report.report_id);
        assert_eq!(back.outcomes.len(), report.outcomes.len());
    }

    #[test]
    fn test_variants_computed_from_own_inputs() {
        let report = ComparisonEngine::new()
            .run(&CalculatorConfig::default())
            .unwrap();
        let base = &report.baseline().result;
        for variant in report.variants() {
            assert_ne!(variant.result.carcass_units_produced, base.carcass_units_produced);
            assert_ne!(variant.result.net_result, base.net_result);
            assert!(variant.input.technology_differential_cost > 0.0);
        }
    }

    #[test]
    fn test_invalid_baseline_stops_comparison() {
        let mut config = CalculatorConfig::default();
        config.baseline.average_daily_gain_kg_per_day = 0.0;

        let err = ComparisonEngine::new().run(&config).unwrap_err();
        match err {
            CalculatorError::InvalidInput(e) => {
                assert_eq!(e.scenario, ScenarioKind::Baseline);
                assert_eq!(e.field, InputField::AverageDailyGainKgPerDay);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_neutral_variant_is_degenerate() {
        let mut config = CalculatorConfig::default();
        config.variants = vec![ScalingProfile {
            label: "Neutro".to_string(),
            description: None,
            gmd_multiplier: 1.0,
            carcass_yield_multiplier: 1.0,
            feed_intake_multiplier: 1.0,
            product: config.baseline.product.clone(),
        }];

        let err = ComparisonEngine::new().run(&config).unwrap_err();
        assert!(matches!(err, CalculatorError::DegenerateComparison(_)));
        assert_eq!(err.scenario(), ScenarioKind::Variant { index: 0 });
    }
}
