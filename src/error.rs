//! # 统一错误处理模块
//!
//! 定义 phonopath 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// phonopath 统一错误类型
#[derive(Error, Debug)]
pub enum PhononError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid {schema} phonon document\nReason: {reason}")]
    SchemaMismatch { schema: String, reason: String },

    #[error("Inconsistent {field}: expected {expected}, found {found}")]
    ShapeMismatch {
        field: String,
        expected: usize,
        found: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 晶格错误
    // ─────────────────────────────────────────────────────────────
    #[error("Degenerate lattice: cell volume {volume:e} is too small to invert")]
    DegenerateLattice { volume: f64 },

    #[error("Invalid q-point path: {0}")]
    InvalidPath(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl PhononError {
    /// 构造 schema 不匹配错误
    pub fn schema(schema: &str, reason: impl Into<String>) -> Self {
        PhononError::SchemaMismatch {
            schema: schema.to_string(),
            reason: reason.into(),
        }
    }

    /// 构造形状不一致错误
    pub fn shape(field: impl Into<String>, expected: usize, found: usize) -> Self {
        PhononError::ShapeMismatch {
            field: field.into(),
            expected,
            found,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PhononError>;
