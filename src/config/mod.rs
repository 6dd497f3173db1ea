// ==========================================
// 育肥场杠杆计算器 - 配置层
// ==========================================
// 职责: 计算配置（基准实测值、经济参数、对比场景系数）的加载与校验
// 存储: JSON 文件
// ==========================================

pub mod config_manager;
pub mod scaling_profile;

// 重导出核心配置类型
pub use config_manager::{
    default_config_path, env_keys, validate_config, BaselineConfig, CalculatorConfig, ConfigError,
    ConfigManager,
};
pub use scaling_profile::ScalingProfile;
