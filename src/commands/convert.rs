//! # convert 命令实现
//!
//! 将声子色散 JSON 转换为内部格式。
//!
//! ## 功能
//! - 自动识别内部格式 / pymatgen 格式
//! - 支持单文件和批量目录处理
//! - 并行处理（rayon）
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `parsers/`, `export/internal.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::convert::ConvertArgs;
use crate::error::{PhononError, Result};
use crate::export;
use crate::parsers::{self, InputEnvelope, NormalizeOptions};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    output::print_header("Converting to internal phonon JSON");

    if args.input.is_file() {
        execute_single_file(&args)
    } else if args.input.is_dir() {
        execute_batch(&args)
    } else {
        Err(PhononError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 单文件模式
fn execute_single_file(args: &ConvertArgs) -> Result<()> {
    let config = ConvertConfig::from_args(args);

    match convert_file(&args.input, &args.output, &config) {
        ProcessResult::Success(msg) => {
            output::print_success(&msg);
            Ok(())
        }
        ProcessResult::Skipped(msg) => {
            output::print_warning(&msg);
            Ok(())
        }
        ProcessResult::Failed(_, err) => Err(PhononError::Other(err)),
    }
}

/// 批量处理模式
fn execute_batch(args: &ConvertArgs) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} phonon files", files.len()));

    fs::create_dir_all(&args.output).map_err(|e| PhononError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let config = ConvertConfig::from_args(args);
    let output_dir = args.output.clone();

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(files, |file| {
        let output_path = batch_output_path(file, &output_dir);
        convert_file(file, &output_path, &config)
    });

    output::print_separator();
    output::print_done(&format!(
        "Batch complete: {} converted, {} skipped, {} failed (of {})",
        result.success,
        result.skipped,
        result.failed,
        result.total()
    ));

    output::print_failures(&result.failures, 10);

    Ok(())
}

/// 单个文件的转换配置
struct ConvertConfig {
    envelope: InputEnvelope,
    options: NormalizeOptions,
    pretty: bool,
    overwrite: bool,
}

impl ConvertConfig {
    fn from_args(args: &ConvertArgs) -> Self {
        ConvertConfig {
            envelope: args.load.envelope(),
            options: args.load.options(),
            pretty: args.pretty,
            overwrite: args.overwrite,
        }
    }
}

/// 批量模式下的输出路径: <output_dir>/<stem>.json
fn batch_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("phonon");
    output_dir.join(format!("{}.json", stem))
}

/// 转换单个文件
fn convert_file(input: &Path, output_path: &Path, config: &ConvertConfig) -> ProcessResult {
    let input_display = input.display().to_string();

    if output_path.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipped: {}",
            output_path.display()
        ));
    }

    let result = parsers::load_file(input, config.envelope, &config.options)
        .and_then(|model| export::internal::write_json(&model, output_path, config.pretty));

    match result {
        Ok(()) => ProcessResult::Success(format!(
            "{} -> {}",
            input_display,
            output_path.display()
        )),
        Err(e) => ProcessResult::Failed(input_display, e.to_string()),
    }
}
