//! # export 命令实现
//!
//! 导出沿路径的能带频率，供外部绘图工具使用。
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `parsers/`, `export/bands.rs`
//! - 使用 `utils/output.rs`

use crate::cli::export::{BandFormat, ExportArgs};
use crate::error::{PhononError, Result};
use crate::export::bands;
use crate::models::FrequencyUnit;
use crate::parsers;
use crate::utils::output;

use std::path::Path;

/// 执行 export 命令
pub fn execute(args: ExportArgs) -> Result<()> {
    output::print_header("Exporting phonon bands");

    if args.output.exists() && !args.overwrite {
        output::print_warning(&format!(
            "Output exists, skipped: {} (use --overwrite)",
            args.output.display()
        ));
        return Ok(());
    }

    let model = parsers::load_file(&args.input, args.load.envelope(), &args.load.options())?;
    output::print_info(&format!(
        "Loaded {}: {} q-points, {} bands, {} segment(s)",
        model.name,
        model.nqpoints(),
        model.nbands(),
        model.path.line_breaks.len()
    ));

    let format = args
        .format
        .or_else(|| infer_format(&args.output))
        .ok_or_else(|| {
            PhononError::InvalidArgument(format!(
                "Cannot infer export format from '{}'; use --format",
                args.output.display()
            ))
        })?;
    let unit = FrequencyUnit::from(args.unit);

    match format {
        BandFormat::Csv => bands::to_csv(&model, unit, &args.output)?,
        BandFormat::Xy => bands::to_xy(&model, unit, &args.output)?,
    }

    output::print_success(&format!(
        "Bands ({}, {}) saved to '{}'",
        format,
        unit,
        args.output.display()
    ));

    Ok(())
}

/// 根据扩展名推断导出格式
fn infer_format(path: &Path) -> Option<BandFormat> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "csv" => Some(BandFormat::Csv),
        "xy" | "dat" | "txt" => Some(BandFormat::Xy),
        _ => None,
    }
}
