use serde::{Deserialize, Serialize};

use crate::domain::AdditiveProduct;

/// 对比场景缩放配置（每个对比场景一份）
///
/// 对比场景不单独实测，由基准实测值乘以固定系数得到。
/// 系数集中在此处，不在计算点重复硬编码。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingProfile {
    /// 显示名称（例如 "Molecula 2"）
    pub label: String,

    /// 说明（可选）
    #[serde(default)]
    pub description: Option<String>,

    /// GMD 系数
    pub gmd_multiplier: f64,

    /// 屠宰率系数
    pub carcass_yield_multiplier: f64,

    /// 采食量 (%PV) 系数
    pub feed_intake_multiplier: f64,

    /// 该场景使用的添加剂产品
    pub product: AdditiveProduct,
}

impl ScalingProfile {
    /// 预设: Molecula 2
    pub fn preset_variant_a() -> Self {
        Self {
            label: "Molecula 2".to_string(),
            description: None,
            gmd_multiplier: 1.077 * 1.02,
            carcass_yield_multiplier: 1.009,
            feed_intake_multiplier: 1.045,
            product: AdditiveProduct::new("Molecula 2", 6.48, 1.88),
        }
    }

    /// 预设: Molecula 3
    pub fn preset_variant_b() -> Self {
        Self {
            label: "Molecula 3".to_string(),
            description: None,
            gmd_multiplier: 1.118 * 1.02,
            carcass_yield_multiplier: 1.0264,
            feed_intake_multiplier: 1.045,
            product: AdditiveProduct::new("Molecula 3", 8.68, 2.26),
        }
    }

    /// 内置预设列表（按对比顺序）
    pub fn presets() -> Vec<ScalingProfile> {
        vec![Self::preset_variant_a(), Self::preset_variant_b()]
    }

    /// 返回第一个不合法的系数（名称, 值），全部合法时返回 None
    ///
    /// 系数必须为有限正数；采食量系数允许为 0（对应零采食边界场景）。
    pub fn first_invalid_multiplier(&self) -> Option<(&'static str, f64)> {
        let checks = [
            ("gmd_multiplier", self.gmd_multiplier, false),
            ("carcass_yield_multiplier", self.carcass_yield_multiplier, false),
            ("feed_intake_multiplier", self.feed_intake_multiplier, true),
        ];

        checks
            .into_iter()
            .find(|(_, value, allow_zero)| {
                !value.is_finite() || *value < 0.0 || (*value == 0.0 && !allow_zero)
            })
            .map(|(name, value, _)| (name, value))
    }
}
