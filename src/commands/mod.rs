//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `export/`, `utils/`
//! - 子模块: convert, inspect, export

pub mod convert;
pub mod export;
pub mod inspect;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Convert(args) => convert::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
        Commands::Export(args) => export::execute(args),
    }
}
