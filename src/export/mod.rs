//! # 数据导出模块
//!
//! 将规范化后的模型写出为内部 JSON 格式或能带数据文件。
//!
//! ## 子模块
//! - `internal`: 内部 JSON 格式
//! - `bands`: 能带数据 (CSV/XY)
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/export.rs` 调用
//! - 使用 `models/`, `parsers/internal.rs`

pub mod bands;
pub mod internal;
