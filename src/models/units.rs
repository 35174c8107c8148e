//! # 频率单位
//!
//! 模型内部频率统一使用 cm⁻¹，导出时可换算为 THz 或 meV。
//!
//! ## 依赖关系
//! - 被 `parsers/pymatgen.rs`、`export/bands.rs`、`cli/` 使用

/// 1 THz = 33.35641 cm⁻¹
pub const THZ_TO_CM1: f64 = 33.35641;

/// 1 eV = 8065.73 cm⁻¹
pub const EV_TO_CM1: f64 = 8065.73;

/// 频率单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyUnit {
    /// 波数 cm⁻¹
    #[default]
    Cm1,
    /// 太赫兹
    Thz,
    /// 毫电子伏
    Mev,
}

impl FrequencyUnit {
    /// 由 cm⁻¹ 换算到本单位
    pub fn from_cm1(&self, value: f64) -> f64 {
        match self {
            FrequencyUnit::Cm1 => value,
            FrequencyUnit::Thz => value / THZ_TO_CM1,
            FrequencyUnit::Mev => value / EV_TO_CM1 * 1000.0,
        }
    }
}

impl std::fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrequencyUnit::Cm1 => write!(f, "cm-1"),
            FrequencyUnit::Thz => write!(f, "THz"),
            FrequencyUnit::Mev => write!(f, "meV"),
        }
    }
}
