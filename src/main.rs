// ==========================================
// 育肥场杠杆计算器 - 命令行入口
// ==========================================
// 用法:
//   feedlot-leverage [--config <file>] [--locale <pt-BR|en|zh-CN>] [--csv <file>]
//                    [--horizon <scenario_specific|shared_baseline>] [--arroba <valor>] [--init]
//
// 报表输出到 stdout, 日志输出到 stderr
// ==========================================

use anyhow::{anyhow, bail, Result};
use feedlot_leverage::config::{env_keys, CalculatorConfig, ConfigError, ConfigManager};
use feedlot_leverage::domain::HorizonMode;
use feedlot_leverage::engine::ComparisonEngine;
use feedlot_leverage::i18n::{
    describe_config_error, describe_error, describe_export_error, set_locale, t, t_with_args,
    DEFAULT_LOCALE,
};
use feedlot_leverage::report::{export_csv_file, parse_decimal, render_text};
use feedlot_leverage::{logging, APP_NAME, VERSION};
use std::path::PathBuf;

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    locale: Option<String>,
    csv: Option<PathBuf>,
    horizon: Option<HorizonMode>,
    arroba_price: Option<f64>,
    init: bool,
    help: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut cli = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => cli.config = Some(PathBuf::from(required_value(&arg, args.next())?)),
            "--locale" => cli.locale = Some(required_value(&arg, args.next())?),
            "--csv" => cli.csv = Some(PathBuf::from(required_value(&arg, args.next())?)),
            "--horizon" => {
                let value = required_value(&arg, args.next())?;
                let mode = value.parse::<HorizonMode>().map_err(|_| {
                    anyhow!(t_with_args(
                        "cli.unknown_option",
                        &[("option", &format!("--horizon {}", value))]
                    ))
                })?;
                cli.horizon = Some(mode);
            }
            "--arroba" => {
                let value = required_value(&arg, args.next())?;
                let price = parse_decimal(&value).map_err(|_| {
                    anyhow!(t_with_args(
                        "cli.invalid_number",
                        &[("option", "--arroba"), ("value", &value)]
                    ))
                })?;
                cli.arroba_price = Some(price);
            }
            "--init" => cli.init = true,
            "-h" | "--help" => cli.help = true,
            other => bail!(t_with_args("cli.unknown_option", &[("option", other)])),
        }
    }

    Ok(cli)
}

fn required_value(option: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| anyhow!(t("cli.usage")).context(option.to_string()))
}

/// 语言优先级: 命令行 > 环境变量 > 配置文件 > 默认语言
fn resolve_locale<'a>(
    cli: Option<&'a str>,
    env: Option<&'a str>,
    config: Option<&'a str>,
) -> &'a str {
    [cli, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|locale| !locale.is_empty())
        .unwrap_or(DEFAULT_LOCALE)
}

/// 读取计算配置
///
/// # 参数
/// - `manager`: 配置管理器；None 表示系统配置目录不可用
/// - `explicit`: 配置路径是否由 --config 显式指定
///
/// # 返回
/// - 显式路径不存在: 错误
/// - 默认位置不存在或不可用: 内置默认配置
fn load_config(manager: Option<&ConfigManager>, explicit: bool) -> Result<CalculatorConfig> {
    let Some(manager) = manager else {
        tracing::info!("系统配置目录不可用, 使用默认配置");
        return Ok(CalculatorConfig::default());
    };

    if explicit && !manager.path().exists() {
        bail!(t_with_args(
            "config.file_not_found",
            &[("path", &manager.path().display().to_string())]
        ));
    }

    manager
        .load_or_default()
        .map_err(|e| anyhow!(describe_config_error(&e)))
}

fn main() -> Result<()> {
    logging::init();

    let cli = parse_args(std::env::args().skip(1))?;

    let env_locale = std::env::var(env_keys::LOCALE).ok();
    if cli.locale.is_some() || env_locale.is_some() {
        set_locale(resolve_locale(cli.locale.as_deref(), env_locale.as_deref(), None));
    }

    if cli.help {
        println!("{} {}", APP_NAME, VERSION);
        println!("{}", t("cli.usage"));
        return Ok(());
    }

    let manager = match &cli.config {
        Some(path) => Some(ConfigManager::new(path)),
        None => ConfigManager::from_default_location().ok(),
    };
    if let Some(manager) = &manager {
        tracing::debug!(path = %manager.path().display(), "配置文件路径");
    }

    if cli.init {
        let manager = manager.ok_or_else(|| {
            anyhow!(describe_config_error(&ConfigError::ConfigDirUnavailable))
        })?;
        let path = manager.path().display().to_string();
        let written = manager
            .write_template()
            .map_err(|e| anyhow!(describe_config_error(&e)))?;
        let key = if written {
            "config.template_written"
        } else {
            "config.template_exists"
        };
        println!("{}", t_with_args(key, &[("path", &path)]));
        return Ok(());
    }

    let mut config = load_config(manager.as_ref(), cli.config.is_some())?;

    set_locale(resolve_locale(
        cli.locale.as_deref(),
        env_locale.as_deref(),
        config.locale.as_deref(),
    ));
    if let Some(mode) = cli.horizon {
        config.horizon_mode = mode;
    }
    if let Some(price) = cli.arroba_price {
        config.economics.arroba_sale_price = price;
    }

    let report = ComparisonEngine::new()
        .run(&config)
        .map_err(|e| anyhow!(describe_error(&e)))?;

    print!("{}", render_text(&report));

    if let Some(path) = &cli.csv {
        export_csv_file(&report, path).map_err(|e| anyhow!(describe_export_error(&e)))?;
        println!(
            "{}",
            t_with_args("cli.csv_written", &[("path", &path.display().to_string())])
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_args() {
        let cli = parse_args(args(&[
            "--config", "calc.json", "--horizon", "shared-baseline", "--arroba", "345,50", "--init",
        ]))
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("calc.json")));
        assert_eq!(cli.horizon, Some(HorizonMode::SharedBaseline));
        assert_eq!(cli.arroba_price, Some(345.5));
        assert!(cli.init);
        assert!(cli.csv.is_none());
    }

    #[test]
    fn test_parse_args_rejects_bad_input() {
        assert!(parse_args(args(&["--arroba", "abc"])).is_err());
        assert!(parse_args(args(&["--csv"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
        assert!(parse_args(args(&["--horizon", "weekly"])).is_err());
    }

    #[test]
    fn test_resolve_locale_precedence() {
        assert_eq!(resolve_locale(Some("en"), Some("zh-CN"), Some("pt-BR")), "en");
        assert_eq!(resolve_locale(None, Some("zh-CN"), Some("en")), "zh-CN");
        assert_eq!(resolve_locale(None, None, Some("en")), "en");
        assert_eq!(resolve_locale(None, None, None), "pt-BR");
        // 空值不参与优先级
        assert_eq!(resolve_locale(Some(" "), None, Some("en")), "en");
    }

    #[test]
    fn test_load_config_missing_explicit_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let manager = ConfigManager::new(dir.path().join("absent.json"));

        let err = load_config(Some(&manager), true).unwrap_err();
        assert!(err.to_string().contains("absent.json"), "{}", err);
    }

    #[test]
    fn test_load_config_missing_default_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let manager = ConfigManager::new(dir.path().join("absent.json"));

        let config = load_config(Some(&manager), false).unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_load_config_without_config_dir_uses_defaults() {
        let config = load_config(None, false).unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_load_config_reads_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("calc.json");
        let mut expected = CalculatorConfig::default();
        expected.locale = Some("en".to_string());
        std::fs::write(&path, serde_json::to_string(&expected).unwrap()).unwrap();

        let config = load_config(Some(&ConfigManager::new(&path)), true).unwrap();
        assert_eq!(config.locale.as_deref(), Some("en"));
    }

    #[test]
    fn test_load_config_malformed_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(load_config(Some(&ConfigManager::new(&path)), true).is_err());
        assert!(load_config(Some(&ConfigManager::new(&path)), false).is_err());
    }
}
