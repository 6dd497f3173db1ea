// ==========================================
// 育肥场杠杆计算器 - 配置管理器
// ==========================================
// 职责: 配置加载、默认值、校验、模板输出
// 存储: JSON 文件 (默认 <config_dir>/feedlot-leverage/config.json)
// ==========================================

use crate::config::scaling_profile::ScalingProfile;
use crate::domain::{AdditiveProduct, EconomicParameters, HorizonMode, ScenarioInput};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

// ==========================================
// BaselineConfig - 基准场景实测值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// 显示名称（例如 "Molecula 1"）
    pub label: String,
    pub initial_live_weight_kg: f64,
    pub final_live_weight_kg: f64,
    pub average_daily_gain_kg_per_day: f64,
    pub carcass_yield_pct: f64,
    /// 小数形式（0.0231 = 2.31%PV）
    pub feed_intake_pct_of_bodyweight: f64,
    pub product: AdditiveProduct,
}

impl BaselineConfig {
    /// 转换为计算输入（基准技术差价恒为 0）
    pub fn to_input(&self) -> ScenarioInput {
        ScenarioInput {
            initial_live_weight_kg: self.initial_live_weight_kg,
            final_live_weight_kg: self.final_live_weight_kg,
            average_daily_gain_kg_per_day: self.average_daily_gain_kg_per_day,
            carcass_yield_pct: self.carcass_yield_pct,
            feed_intake_pct_of_bodyweight: self.feed_intake_pct_of_bodyweight,
            technology_differential_cost: 0.0,
        }
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            label: "Molecula 1".to_string(),
            initial_live_weight_kg: 390.0,
            final_live_weight_kg: 560.0,
            average_daily_gain_kg_per_day: 1.551,
            carcass_yield_pct: 54.89,
            feed_intake_pct_of_bodyweight: 0.0231,
            product: AdditiveProduct::new("Molecula 1", 4.90, 1.23),
        }
    }
}

// ==========================================
// CalculatorConfig - 完整计算配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub baseline: BaselineConfig,

    #[serde(default)]
    pub economics: EconomicParameters,

    /// 对比场景（按顺序对应 Variant A, B, ...）
    #[serde(default = "ScalingProfile::presets")]
    pub variants: Vec<ScalingProfile>,

    #[serde(default)]
    pub horizon_mode: HorizonMode,

    /// 界面语言（pt-BR / en / zh-CN），为空时使用默认语言
    #[serde(default)]
    pub locale: Option<String>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            baseline: BaselineConfig::default(),
            economics: EconomicParameters::default(),
            variants: ScalingProfile::presets(),
            horizon_mode: HorizonMode::default(),
            locale: None,
        }
    }
}

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("配置文件格式错误 ({path}): {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("系统配置目录不可用")]
    ConfigDirUnavailable,

    #[error("至少需要一个对比场景")]
    NoVariants,

    #[error("对比场景 {label} 的系数 {name} 不合法: {value}")]
    InvalidMultiplier {
        label: String,
        name: &'static str,
        value: f64,
    },
}

// ==========================================
// 环境变量键
// ==========================================
pub mod env_keys {
    /// 覆盖配置文件路径
    pub const CONFIG_PATH: &str = "FEEDLOT_LEVERAGE_CONFIG";
    /// 覆盖界面语言
    pub const LOCALE: &str = "FEEDLOT_LEVERAGE_LOCALE";
}

const APP_DIR_NAME: &str = "feedlot-leverage";
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// 使用指定配置文件路径
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 使用默认位置（环境变量优先，其次系统配置目录）
    pub fn from_default_location() -> Result<Self, ConfigError> {
        if let Ok(custom) = std::env::var(env_keys::CONFIG_PATH) {
            if !custom.trim().is_empty() {
                return Ok(Self::new(custom.trim()));
            }
        }

        default_config_path()
            .map(Self::new)
            .ok_or(ConfigError::ConfigDirUnavailable)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取并校验配置
    ///
    /// # 返回
    /// - Ok(CalculatorConfig): 解析并校验通过的配置
    /// - Err(ConfigError): 文件不存在/格式错误/校验失败
    pub fn load(&self) -> Result<CalculatorConfig, ConfigError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        let config: CalculatorConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?;

        validate_config(&config)?;
        debug!(path = %self.path.display(), variants = config.variants.len(), "配置加载完成");
        Ok(config)
    }

    /// 读取配置，文件不存在时返回默认配置
    ///
    /// 注意: 文件存在但格式错误时仍然返回错误，不静默回退
    pub fn load_or_default(&self) -> Result<CalculatorConfig, ConfigError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "配置文件不存在, 使用默认配置");
            return Ok(CalculatorConfig::default());
        }
        self.load()
    }

    /// 写出配置模板（默认配置），用于首次使用
    ///
    /// 已存在的文件不会被覆盖，返回 Ok(false)
    pub fn write_template(&self) -> Result<bool, ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&CalculatorConfig::default())?;

        // create_new: 文件已存在时由操作系统原子地拒绝
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                warn!(path = %self.path.display(), "配置文件已存在, 跳过模板写出");
                return Ok(false);
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        file.write_all(json.as_bytes())
            .map_err(|source| ConfigError::Io {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), "配置模板已写出");
        Ok(true)
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// 配置结构校验
///
/// 数值合法性（GMD、体重等）由计算引擎校验并指明字段，
/// 这里只校验配置结构本身。
pub fn validate_config(config: &CalculatorConfig) -> Result<(), ConfigError> {
    if config.variants.is_empty() {
        return Err(ConfigError::NoVariants);
    }

    for profile in &config.variants {
        if let Some((name, value)) = profile.first_invalid_multiplier() {
            return Err(ConfigError::InvalidMultiplier {
                label: profile.label.clone(),
                name,
                value,
            });
        }
    }

    Ok(())
}
