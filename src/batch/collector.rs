//! # 文件收集器
//!
//! 根据输入路径和模式收集待转换的声子 JSON 文件。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - glob 模式匹配（逗号分隔多模式，如 `*.json,band*`）
//! - 递归目录搜索
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名

use crate::error::{PhononError, Result};

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: vec!["*.json".to_string()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        let patterns: Vec<String> = pattern
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !patterns.is_empty() {
            self.patterns = patterns;
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件（按路径排序）
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if self.input.is_file() {
            return Ok(vec![self.input.clone()]);
        }

        if !self.input.is_dir() {
            return Ok(vec![]);
        }

        let patterns = self.compile_patterns()?;
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| matches_any(&patterns, e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }

    fn compile_patterns(&self) -> Result<Vec<Pattern>> {
        self.patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    PhononError::InvalidArgument(format!("Invalid file pattern '{}': {}", p, e))
                })
            })
            .collect()
    }
}

/// 文件名是否匹配任一模式
fn matches_any(patterns: &[Pattern], path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| patterns.iter().any(|p| p.matches(name)))
        .unwrap_or(false)
}
