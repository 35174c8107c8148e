//! # phonopath - 声子色散数据规范化库
//!
//! 读取声子色散 JSON（内部格式或 pymatgen 格式），统一成带高对称路径信息的
//! 能带模型，供可视化前端或绘图脚本使用。
//!
//! ## 子命令
//! - `convert` - 转换为内部 JSON 格式（支持目录批量处理）
//! - `inspect` - 打印模型摘要、路径段与高对称点
//! - `export`  - 导出能带频率 (CSV / XY)
//!
//! ## 依赖关系
//! ```text
//! lib.rs (main.rs 仅解析命令行并调用 commands::run)
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (格式解析与路径重建)
//!   │     ├── export/    (导出器)
//!   │     ├── batch/     (批量处理)
//!   │     └── models/    (数据模型)
//!   ├── math/       (向量与坐标变换)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod math;
pub mod models;
pub mod parsers;
pub mod utils;

pub use error::{PhononError, Result};
pub use models::PhononModel;
pub use parsers::{load_file, load_from_str, load_with, InputEnvelope, NormalizeOptions};
