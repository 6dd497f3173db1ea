// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持葡萄牙语（默认）、英文、中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::config::ConfigError;
use crate::domain::{variant_letters, HorizonMode, ScenarioKind};
use crate::engine::{CalculatorError, DegenerateComparisonError, InvalidInputError};
use crate::report::format::format_decimal;
use crate::report::ExportError;

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 3] = ["pt-BR", "en", "zh-CN"];

/// 默认语言
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"pt-BR" / "en" / "zh-CN"）
///
/// # 返回
/// 不支持的语言返回 false，当前语言保持不变
pub fn set_locale(locale: &str) -> bool {
    let locale = locale.trim();
    match SUPPORTED_LOCALES
        .iter()
        .find(|supported| supported.eq_ignore_ascii_case(locale))
    {
        Some(supported) => {
            rust_i18n::set_locale(supported);
            true
        }
        None => {
            tracing::warn!(locale, "不支持的语言, 保持当前语言");
            false
        }
    }
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use feedlot_leverage::i18n::t;
/// let msg = t("report.title");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use feedlot_leverage::i18n::t_with_args;
/// let msg = t_with_args("config.file_not_found", &[("path", "/tmp/config.json")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

/// 场景显示名称（本地化）
pub fn scenario_name(kind: ScenarioKind) -> String {
    match kind {
        ScenarioKind::Baseline => t("scenario.baseline"),
        ScenarioKind::Variant { index } => {
            t_with_args("scenario.variant", &[("letter", &variant_letters(index))])
        }
    }
}

/// 时间口径显示名称（本地化）
pub fn horizon_mode_name(mode: HorizonMode) -> String {
    t(&format!("horizon.{}", mode.as_str()))
}

/// 计算错误转为面向操作员的提示（指明字段，不含 NaN/Infinity）
pub fn describe_error(err: &CalculatorError) -> String {
    match err {
        CalculatorError::InvalidInput(e) => describe_invalid_input(e),
        CalculatorError::DegenerateComparison(e) => describe_degenerate(e),
    }
}

fn describe_invalid_input(err: &InvalidInputError) -> String {
    let scenario = scenario_name(err.scenario);
    let field = t(&format!("field.{}", err.field.as_str()));
    let constraint = t(&format!("constraint.{}", err.constraint.as_str()));

    if err.value.is_finite() {
        let value = format_decimal(err.value, 4);
        t_with_args(
            "error.invalid_input",
            &[
                ("scenario", &scenario),
                ("field", &field),
                ("value", &value),
                ("constraint", &constraint),
            ],
        )
    } else {
        t_with_args(
            "error.invalid_input_non_finite",
            &[
                ("scenario", &scenario),
                ("field", &field),
                ("constraint", &constraint),
            ],
        )
    }
}

/// 配置错误转为面向操作员的提示
pub fn describe_config_error(err: &ConfigError) -> String {
    match err {
        ConfigError::Io { path, source } => t_with_args(
            "config.read_failed",
            &[("path", &path.display().to_string()), ("reason", &source.to_string())],
        ),
        ConfigError::Parse { path, source } => t_with_args(
            "config.parse_failed",
            &[("path", &path.display().to_string()), ("reason", &source.to_string())],
        ),
        ConfigError::Serialize(source) => {
            t_with_args("config.serialize_failed", &[("reason", &source.to_string())])
        }
        ConfigError::ConfigDirUnavailable => t("config.dir_unavailable"),
        ConfigError::NoVariants => t("config.no_variants"),
        ConfigError::InvalidMultiplier { label, name, value } => {
            let name = t(&format!("multiplier.{}", name));
            if value.is_finite() {
                t_with_args(
                    "config.invalid_multiplier",
                    &[
                        ("label", label),
                        ("name", &name),
                        ("value", &format_decimal(*value, 4)),
                    ],
                )
            } else {
                t_with_args(
                    "config.invalid_multiplier_non_finite",
                    &[("label", label), ("name", &name)],
                )
            }
        }
    }
}

/// 导出错误转为面向操作员的提示
pub fn describe_export_error(err: &ExportError) -> String {
    match err {
        ExportError::Io { path, source } => t_with_args(
            "export.write_failed",
            &[("path", &path.display().to_string()), ("reason", &source.to_string())],
        ),
        ExportError::Csv(source) => {
            t_with_args("export.csv_failed", &[("reason", &source.to_string())])
        }
    }
}

fn describe_degenerate(err: &DegenerateComparisonError) -> String {
    let scenario = scenario_name(err.scenario);
    let metric = t(&format!("metric.{}", err.metric.as_str()));
    t_with_args(
        "error.degenerate_comparison",
        &[("scenario", &scenario), ("metric", &metric)],
    )
}
