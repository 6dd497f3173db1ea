// ==========================================
// 育肥场杠杆计算器 - CSV 导出
// ==========================================
// 每个场景一行; 基准行的增量指标列为空
// 数值保持原始精度 (机器可读, 不做巴西格式化)
// ==========================================

use crate::engine::{ComparisonReport, ScenarioOutcome};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("无法创建导出文件 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),
}

/// CSV 行
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    scenario: &'a str,
    label: &'a str,
    product: &'a str,
    initial_live_weight_kg: f64,
    final_live_weight_kg: f64,
    average_daily_gain_kg_per_day: f64,
    carcass_yield_pct: f64,
    feed_intake_pct_of_bodyweight: f64,
    technology_differential_cost: f64,
    confinement_days: f64,
    dry_matter_intake_kg_per_day: f64,
    carcass_units_produced: f64,
    daily_feeding_cost: f64,
    total_period_feeding_cost: f64,
    revenue: f64,
    lean_animal_cost: f64,
    net_result: f64,
    period_return_rate: f64,
    monthly_return_rate: f64,
    biological_efficiency: f64,
    carcass_daily_gain_kg: f64,
    final_weight_arrobas: f64,
    profit_increment_pct: Option<f64>,
    extra_carcass_units: Option<f64>,
    extra_revenue: Option<f64>,
    extra_cost: Option<f64>,
    extra_profit: Option<f64>,
    extra_cost_per_carcass_unit: Option<f64>,
}

impl<'a> CsvRow<'a> {
    fn from_outcome(code: &'a str, outcome: &'a ScenarioOutcome) -> Self {
        let input = &outcome.input;
        let r = &outcome.result;
        let inc = outcome.incremental.as_ref();
        Self {
            scenario: code,
            label: &outcome.label,
            product: &outcome.product.name,
            initial_live_weight_kg: input.initial_live_weight_kg,
            final_live_weight_kg: input.final_live_weight_kg,
            average_daily_gain_kg_per_day: input.average_daily_gain_kg_per_day,
            carcass_yield_pct: input.carcass_yield_pct,
            feed_intake_pct_of_bodyweight: input.feed_intake_pct_of_bodyweight,
            technology_differential_cost: input.technology_differential_cost,
            confinement_days: r.confinement_days,
            dry_matter_intake_kg_per_day: r.dry_matter_intake_kg_per_day,
            carcass_units_produced: r.carcass_units_produced,
            daily_feeding_cost: r.daily_feeding_cost,
            total_period_feeding_cost: r.total_period_feeding_cost,
            revenue: r.revenue,
            lean_animal_cost: r.lean_animal_cost,
            net_result: r.net_result,
            period_return_rate: r.period_return_rate,
            monthly_return_rate: r.monthly_return_rate,
            biological_efficiency: r.biological_efficiency,
            carcass_daily_gain_kg: r.carcass_daily_gain_kg,
            final_weight_arrobas: r.final_weight_arrobas,
            profit_increment_pct: inc.map(|m| m.profit_increment_pct),
            extra_carcass_units: inc.map(|m| m.extra_carcass_units),
            extra_revenue: inc.map(|m| m.extra_revenue),
            extra_cost: inc.map(|m| m.extra_cost),
            extra_profit: inc.map(|m| m.extra_profit),
            extra_cost_per_carcass_unit: inc.map(|m| m.extra_cost_per_carcass_unit),
        }
    }
}

/// 将报告写入任意 Writer
pub fn write_csv<W: Write>(report: &ComparisonReport, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    let codes: Vec<String> = report.outcomes.iter().map(|o| o.kind.code()).collect();
    for (code, outcome) in codes.iter().zip(&report.outcomes) {
        wtr.serialize(CsvRow::from_outcome(code, outcome))?;
    }
    wtr.flush()?;
    Ok(())
}

/// 导出到文件
///
/// # 返回
/// 写入的数据行数（不含表头）
pub fn export_csv_file(report: &ComparisonReport, path: &Path) -> Result<usize, ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(report, file)?;

    info!(
        report_id = %report.report_id,
        path = %path.display(),
        rows = report.outcomes.len(),
        "CSV 导出完成"
    );
    Ok(report.outcomes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;
    use crate::engine::ComparisonEngine;

    #[test]
    fn test_write_csv_rows() {
        let report = ComparisonEngine::new()
            .run(&CalculatorConfig::default())
            .unwrap();

        let mut buf = Vec::new();
        write_csv(&report, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("scenario,label,product,"));
        assert!(lines[0].ends_with("extra_cost_per_carcass_unit"));
        assert!(lines[1].starts_with("baseline,Molecula 1,Molecula 1,390"));
        // 基准行增量列为空
        assert!(lines[1].ends_with(",,,,,"));
        assert!(lines[2].starts_with("variant_a,"));
        assert!(lines[3].starts_with("variant_b,"));
    }
}
