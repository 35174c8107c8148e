//! # convert 子命令 CLI 定义
//!
//! 将声子色散 JSON（内部格式或 pymatgen）转换为内部格式。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use super::LoadArgs;
use clap::Args;
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input: phonon JSON file or directory containing JSON files
    pub input: PathBuf,

    /// Output: file path (single mode) or directory (batch mode)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Pretty-print the output JSON
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for input files (batch mode, comma-separated)
    #[arg(short, long, default_value = "*.json")]
    pub pattern: String,

    /// Recurse into subdirectories (batch mode)
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    #[command(flatten)]
    pub load: LoadArgs,
}
