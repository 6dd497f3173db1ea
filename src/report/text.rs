// ==========================================
// 育肥场杠杆计算器 - 文本报表
// ==========================================
// 职责: 将 ComparisonReport 渲染为纯文本 (每个场景一张 "卡片")
// 标签随当前语言切换, 数值使用巴西格式
// ==========================================

use crate::engine::{ComparisonReport, ScenarioOutcome};
use crate::i18n::{horizon_mode_name, scenario_name, t};
use crate::report::format::{format_currency, format_decimal, format_rate_as_percent};

const INDENT: &str = "  ";

/// 渲染完整对比报表
pub fn render_text(report: &ComparisonReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", t("report.title")));
    out.push_str(&format!(
        "{}: {}\n\n",
        t("report.horizon_mode"),
        horizon_mode_name(report.horizon_mode)
    ));

    // ===== 核心指标 =====
    let insights = &report.insights;
    out.push_str(&format!("{}\n", t("report.insights")));
    push_metric(
        &mut out,
        "metric.confinement_days",
        format_decimal(insights.confinement_days, 0),
    );
    push_metric(
        &mut out,
        "metric.carcass_daily_gain",
        format_decimal(insights.carcass_daily_gain_kg, 3),
    );
    push_metric(
        &mut out,
        "metric.carcass_units",
        format_decimal(insights.carcass_units_produced, 2),
    );
    push_metric(
        &mut out,
        "metric.technology_differential",
        format_decimal(insights.technology_differential_cost, 2),
    );
    out.push('\n');

    // ===== 场景卡片 =====
    out.push_str(&format!("--- {} ---\n", t("report.comparison")));
    for outcome in &report.outcomes {
        render_card(&mut out, outcome);
        out.push('\n');
    }

    // ===== 主要参数 =====
    let baseline = report.baseline();
    out.push_str(&format!("{}\n", t("report.parameters")));
    out.push_str(&format!(
        "{}GMD: {} | {}: {}% | {}: {}\n",
        INDENT,
        format_decimal(baseline.input.average_daily_gain_kg_per_day, 3),
        t("field.carcass_yield_pct"),
        format_decimal(baseline.input.carcass_yield_pct, 2),
        t("report.arroba_price"),
        format_currency(report.economics.arroba_sale_price),
    ));

    out
}

fn render_card(out: &mut String, outcome: &ScenarioOutcome) {
    out.push_str(&format!(
        "[{}] {} | {}: {}\n",
        scenario_name(outcome.kind),
        outcome.label,
        t("report.product"),
        outcome.product.name
    ));

    if let Some(inc) = &outcome.incremental {
        push_metric(
            out,
            "metric.profit_increment_pct",
            format!("{}%", format_decimal(inc.profit_increment_pct, 2)),
        );
        push_metric(
            out,
            "metric.extra_carcass_units",
            with_unit(format_decimal(inc.extra_carcass_units, 2), "unit.arrobas_per_head"),
        );
        push_metric(out, "metric.extra_revenue", format_currency(inc.extra_revenue));
        push_metric(out, "metric.extra_cost", format_currency(inc.extra_cost));
        push_metric(out, "metric.extra_profit", format_currency(inc.extra_profit));
        push_metric(
            out,
            "metric.extra_cost_per_carcass_unit",
            format_currency(inc.extra_cost_per_carcass_unit),
        );
    }

    let r = &outcome.result;
    push_metric(
        out,
        "metric.dry_matter_intake",
        with_unit(format_decimal(r.dry_matter_intake_kg_per_day, 2), "unit.kg_per_head_day"),
    );
    push_metric(
        out,
        "metric.final_weight_arrobas",
        with_unit(format_decimal(r.final_weight_arrobas, 2), "unit.arrobas_per_head"),
    );
    push_metric(
        out,
        "metric.biological_efficiency",
        with_unit(format_decimal(r.biological_efficiency, 2), "unit.kg_dm_per_arroba"),
    );
    push_metric(out, "metric.daily_feeding_cost", format_currency(r.daily_feeding_cost));
    push_metric(out, "metric.net_result", format_currency(r.net_result));
    push_metric(out, "metric.period_return", format_rate_as_percent(r.period_return_rate));
    push_metric(out, "metric.monthly_return", format_rate_as_percent(r.monthly_return_rate));
}

fn with_unit(value: String, unit_key: &str) -> String {
    format!("{} {}", value, t(unit_key))
}

fn push_metric(out: &mut String, key: &str, value: String) {
    out.push_str(&format!("{}{}: {}\n", INDENT, t(key), value));
}
