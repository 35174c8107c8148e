//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 任意格式 -> 内部 JSON 格式（支持批量）
//! - `inspect`: 打印模型摘要、路径段与高对称点
//! - `export`: 导出能带数据 (CSV/XY)
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, inspect, export

pub mod convert;
pub mod export;
pub mod inspect;

use crate::math::DEFAULT_MATCH_TOLERANCE;
use crate::parsers::{
    InputEnvelope, NormalizeOptions, DEFAULT_DISPLACEMENT_SCALE, DEFAULT_REPETITIONS,
};

use clap::{Args, Parser, Subcommand};

/// phonopath - 声子色散 JSON 规范化工具
#[derive(Parser)]
#[command(name = "phonopath")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Normalize phonon dispersion JSON into a band-structure path", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert phonon JSON (internal or pymatgen) to the internal format
    Convert(convert::ConvertArgs),

    /// Print a summary of a phonon dispersion file
    Inspect(inspect::InspectArgs),

    /// Export band frequencies along the path (CSV/XY)
    Export(export::ExportArgs),
}

/// 加载参数（各子命令共用）
#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Input is a REST response wrapping the document in a "response" field
    #[arg(long, default_value_t = false)]
    pub rest_envelope: bool,

    /// Scale factor applied to pymatgen eigendisplacements
    #[arg(long, default_value_t = DEFAULT_DISPLACEMENT_SCALE)]
    pub scale: f64,

    /// Tolerance for matching q-points to labeled high-symmetry points
    #[arg(long, default_value_t = DEFAULT_MATCH_TOLERANCE)]
    pub tolerance: f64,

    /// Periodic repetitions for pymatgen input (e.g., "3,3,3")
    #[arg(long, value_parser = parse_repetitions, default_value = "3,3,3")]
    pub repetitions: [u32; 3],
}

impl LoadArgs {
    /// 规范化参数
    pub fn options(&self) -> NormalizeOptions {
        NormalizeOptions {
            displacement_scale: self.scale,
            match_tolerance: self.tolerance,
            repetitions: self.repetitions,
        }
    }

    /// 输入包装方式
    pub fn envelope(&self) -> InputEnvelope {
        if self.rest_envelope {
            InputEnvelope::Rest
        } else {
            InputEnvelope::Bare
        }
    }
}

impl Default for LoadArgs {
    fn default() -> Self {
        LoadArgs {
            rest_envelope: false,
            scale: DEFAULT_DISPLACEMENT_SCALE,
            tolerance: DEFAULT_MATCH_TOLERANCE,
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

/// 解析周期重复次数 "a,b,c"
pub fn parse_repetitions(input: &str) -> Result<[u32; 3], String> {
    let values: Vec<u32> = input
        .split(',')
        .map(|s| s.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("Invalid repetitions '{}'. Use three integers, e.g. 3,3,3", input))?;

    match values.as_slice() {
        [a, b, c] if *a > 0 && *b > 0 && *c > 0 => Ok([*a, *b, *c]),
        _ => Err(format!(
            "Invalid repetitions '{}'. Use three positive integers, e.g. 3,3,3",
            input
        )),
    }
}
