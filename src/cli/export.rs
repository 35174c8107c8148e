//! # export 子命令 CLI 定义
//!
//! 导出沿路径的能带频率。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use super::LoadArgs;
use crate::models::FrequencyUnit;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 能带导出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum BandFormat {
    /// CSV table (index, distance, band_1..band_N)
    Csv,
    /// XY blocks, one per band (gnuplot friendly)
    Xy,
}

impl std::fmt::Display for BandFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BandFormat::Csv => write!(f, "csv"),
            BandFormat::Xy => write!(f, "xy"),
        }
    }
}

/// 频率单位
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum UnitArg {
    /// Wavenumber (cm⁻¹)
    #[default]
    Cm1,
    /// Terahertz
    Thz,
    /// Millielectronvolt
    Mev,
}

impl From<UnitArg> for FrequencyUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Cm1 => FrequencyUnit::Cm1,
            UnitArg::Thz => FrequencyUnit::Thz,
            UnitArg::Mev => FrequencyUnit::Mev,
        }
    }
}

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Phonon JSON file (internal or pymatgen format)
    pub input: PathBuf,

    /// Output data file
    #[arg(short, long, default_value = "bands.csv")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<BandFormat>,

    /// Frequency unit
    #[arg(short, long, value_enum, default_value = "cm1")]
    pub unit: UnitArg,

    /// Overwrite an existing output file
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    #[command(flatten)]
    pub load: LoadArgs,
}
