//! # inspect 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use super::LoadArgs;
use clap::Args;
use std::path::PathBuf;

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Phonon JSON file (internal or pymatgen format)
    pub input: PathBuf,

    /// Number of lowest bands to list at each high-symmetry point
    #[arg(long, default_value_t = 3)]
    pub bands: usize,

    #[command(flatten)]
    pub load: LoadArgs,
}
