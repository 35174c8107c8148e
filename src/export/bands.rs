//! # 能带数据导出
//!
//! 导出频率数据到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: 每个 q 点一行：index, distance, band_1 ... band_N
//! - XY: 每条能带一个数据块（distance, frequency），路径段之间空一行，
//!   能带之间空两行，可直接用于 gnuplot
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 调用
//! - 使用 `models/phonon.rs`, `models/units.rs`
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{PhononError, Result};
use crate::models::{FrequencyUnit, PhononModel};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 导出能带为 CSV 文件
pub fn to_csv(model: &PhononModel, unit: FrequencyUnit, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| PhononError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    write_csv(model, unit, file)
}

/// 将能带以 CSV 写入任意 writer
pub fn write_csv<W: Write>(model: &PhononModel, unit: FrequencyUnit, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["index".to_string(), "distance".to_string()];
    header.extend((1..=model.nbands()).map(|n| format!("band_{}", n)));
    wtr.write_record(&header)?;

    for (q, (distance, freqs)) in model
        .path
        .distances
        .iter()
        .zip(&model.eigenvalues)
        .enumerate()
    {
        let mut record = vec![q.to_string(), format!("{:.6}", distance)];
        record.extend(freqs.iter().map(|f| format!("{:.6}", unit.from_cm1(*f))));
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| PhononError::CsvError(e.into()))?;
    Ok(())
}

/// 导出能带为 XY 文件
pub fn to_xy(model: &PhononModel, unit: FrequencyUnit, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| PhononError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    write_xy(model, unit, BufWriter::new(file)).map_err(|e| PhononError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

/// 将能带以 XY 数据块写入任意 writer
pub fn write_xy<W: Write>(
    model: &PhononModel,
    unit: FrequencyUnit,
    mut writer: W,
) -> std::io::Result<()> {
    writeln!(writer, "# Phonon dispersion: {}", model.name)?;
    writeln!(writer, "# Columns: distance, frequency ({})", unit)?;
    for (distance, label) in &model.path.highsym_qpts {
        writeln!(writer, "# {:.6} {}", distance.0, label)?;
    }
    writeln!(writer, "#")?;

    for band in 0..model.nbands() {
        if band > 0 {
            writeln!(writer)?;
            writeln!(writer)?;
        }
        for (segment, lb) in model.path.line_breaks.iter().enumerate() {
            if segment > 0 {
                writeln!(writer)?;
            }
            for q in lb.start..lb.end {
                writeln!(
                    writer,
                    "{:.6}\t{:.6}",
                    model.path.distances[q],
                    unit.from_cm1(model.eigenvalues[q][band])
                )?;
            }
        }
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::fixtures::PYMATGEN_CUBIC;
    use crate::parsers::{load_from_str, NormalizeOptions};

    fn sample_model() -> PhononModel {
        load_from_str(PYMATGEN_CUBIC, &NormalizeOptions::default()).unwrap()
    }

    #[test]
    fn test_csv_rows_per_qpoint() {
        let mut buffer = Vec::new();
        write_csv(&sample_model(), FrequencyUnit::Thz, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "index,distance,band_1,band_2");
        assert_eq!(lines[2], "1,0.500000,1.000000,11.000000");
        assert_eq!(lines[4], "3,1.000000,3.000000,13.000000");
    }

    #[test]
    fn test_xy_blocks_split_by_segment_and_band() {
        let mut buffer = Vec::new();
        write_xy(&sample_model(), FrequencyUnit::Thz, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("# 1.000000 U|X"));
        let data: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        // 2 条能带 x (6 个点 + 1 个段间空行) + 能带间 2 个空行
        assert_eq!(data.len(), 2 * 7 + 2);
        assert_eq!(data[0], "0.000000\t0.000000");
        assert_eq!(data[3], "");
        assert_eq!(data[4], "1.000000\t3.000000");
    }
}
