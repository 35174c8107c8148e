//! # 批量处理模块
//!
//! 目录输入时，收集声子 JSON 文件并行转换。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchRunner, ProcessResult};
