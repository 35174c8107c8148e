//! # inspect 命令实现
//!
//! 加载声子色散文件并打印摘要。
//!
//! ## 输出
//! - 模型摘要（名称、原子数、q 点数、能带数、路径段数……）
//! - 路径段表
//! - 高对称点表（距离、索引、标签、最低几支频率）
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `parsers/`
//! - 使用 `utils/output.rs`, `tabled`

use crate::cli::inspect::InspectArgs;
use crate::error::Result;
use crate::math::Vec3;
use crate::models::PhononModel;
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 摘要表行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Property")]
    property: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 路径段表行
#[derive(Debug, Clone, Tabled)]
struct SegmentRow {
    #[tabled(rename = "Segment")]
    segment: usize,
    #[tabled(rename = "Q-points")]
    range: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Length (1/Å)")]
    length: String,
}

/// 原子表行
#[derive(Debug, Clone, Tabled)]
struct AtomRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Element")]
    element: String,
    #[tabled(rename = "Z")]
    atomic_number: String,
    #[tabled(rename = "Fractional")]
    reduced: String,
    #[tabled(rename = "Cartesian (Å)")]
    cartesian: String,
}

/// 高对称点表行
#[derive(Debug, Clone, Tabled)]
struct HighSymRow {
    #[tabled(rename = "Distance")]
    distance: String,
    #[tabled(rename = "Index")]
    index: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Q (reduced)")]
    reduced: String,
    #[tabled(rename = "Lowest bands (cm⁻¹)")]
    frequencies: String,
}

/// 执行 inspect 命令
pub fn execute(args: InspectArgs) -> Result<()> {
    output::print_header(&format!("Inspecting '{}'", args.input.display()));

    let text = parsers::read_file(&args.input)?;
    parsers::load_with(&text, args.load.envelope(), &args.load.options(), |model| {
        print_model(&model, args.bands)
    })
}

fn print_model(model: &PhononModel, nbands_shown: usize) {
    let summary = summary_rows(model);
    println!("{}", Table::new(&summary));

    output::print_header("Atoms");
    println!("{}", Table::new(atom_rows(model)));

    output::print_header("Path segments");
    println!("{}", Table::new(segment_rows(model)));

    if model.path.highsym_qpts.is_empty() {
        output::print_warning("No high-symmetry points were identified on the path.");
    } else {
        output::print_header("High-symmetry points");
        println!("{}", Table::new(highsym_rows(model, nbands_shown)));
    }

    output::print_success(&format!(
        "Loaded {} ({} q-points, {} bands)",
        model.name,
        model.nqpoints(),
        model.nbands()
    ));
}

fn summary_rows(model: &PhononModel) -> Vec<SummaryRow> {
    let (a, b, c, alpha, beta, gamma) = model.lattice.parameters();
    let total_length = model.path.distances.last().copied().unwrap_or(0.0);

    vec![
        SummaryRow {
            property: "Name",
            value: model.name.clone(),
        },
        SummaryRow {
            property: "Formula",
            value: model.formula.clone(),
        },
        SummaryRow {
            property: "Atoms",
            value: model.natoms.to_string(),
        },
        SummaryRow {
            property: "Lattice (a, b, c)",
            value: format!("{:.4} {:.4} {:.4}", a, b, c),
        },
        SummaryRow {
            property: "Angles (α, β, γ)",
            value: format!("{:.2} {:.2} {:.2}", alpha, beta, gamma),
        },
        SummaryRow {
            property: "Volume (Å³)",
            value: format!("{:.4}", model.lattice.volume().abs()),
        },
        SummaryRow {
            property: "Q-points",
            value: model.nqpoints().to_string(),
        },
        SummaryRow {
            property: "Bands",
            value: model.nbands().to_string(),
        },
        SummaryRow {
            property: "Segments",
            value: model.path.line_breaks.len().to_string(),
        },
        SummaryRow {
            property: "Path length",
            value: format!("{:.6}", total_length),
        },
        SummaryRow {
            property: "Repetitions",
            value: format!(
                "{}x{}x{}",
                model.repetitions[0], model.repetitions[1], model.repetitions[2]
            ),
        },
    ]
}

fn segment_rows(model: &PhononModel) -> Vec<SegmentRow> {
    let label_or_dash = |d: f64| model.path.label_at(d).unwrap_or("-").to_string();

    model
        .path
        .segments()
        .enumerate()
        .map(|(i, (lb, distances))| {
            let first = distances.first().copied().unwrap_or(0.0);
            let last = distances.last().copied().unwrap_or(first);
            SegmentRow {
                segment: i + 1,
                range: format!("[{}, {})", lb.start, lb.end),
                from: label_or_dash(first),
                to: label_or_dash(last),
                length: format!("{:.6}", last - first),
            }
        })
        .collect()
}

fn atom_rows(model: &PhononModel) -> Vec<AtomRow> {
    model
        .atoms()
        .enumerate()
        .map(|(i, atom)| AtomRow {
            index: i + 1,
            element: atom.element,
            atomic_number: atom
                .atomic_number
                .map(|z| z.to_string())
                .unwrap_or_else(|| "-".to_string()),
            reduced: format_vec3(&atom.position_red, 4),
            cartesian: format_vec3(&atom.position_car, 4),
        })
        .collect()
}

fn highsym_rows(model: &PhononModel, nbands_shown: usize) -> Vec<HighSymRow> {
    // 内部格式不校验晶格，不可逆时省略约化坐标
    let reciprocal = model.lattice.reciprocal().ok();

    model
        .path
        .highsym_qpts
        .iter()
        .map(|(distance, label)| {
            let index = model.path.index_at(distance.0);
            let frequencies = index
                .and_then(|q| model.eigenvalues.get(q))
                .map(|freqs| {
                    freqs
                        .iter()
                        .take(nbands_shown)
                        .map(|f| format!("{:.2}", f))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            let reduced = index
                .and_then(|q| model.path.qpoints.get(q))
                .zip(reciprocal.as_ref())
                .map(|(q, rlat)| format_vec3(&rlat.cartesian_to_reduced(q), 4))
                .unwrap_or_else(|| "-".to_string());

            HighSymRow {
                distance: format!("{:.6}", distance.0),
                index: index.map(|i| i.to_string()).unwrap_or_else(|| "-".to_string()),
                label: label.clone(),
                reduced,
                frequencies,
            }
        })
        .collect()
}

fn format_vec3(v: &Vec3, precision: usize) -> String {
    format!(
        "{:.p$} {:.p$} {:.p$}",
        v[0],
        v[1],
        v[2],
        p = precision
    )
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
    fn test_segment_rows_use_labels() {
        let rows = segment_rows(&sample_model());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].from, "\\Gamma");
        assert_eq!(rows[0].to, "U|X");
        assert_eq!(rows[0].range, "[0, 3)");
        assert_eq!(rows[1].from, "U|X");
        assert_eq!(rows[1].to, "M");
        assert_eq!(rows[1].length, "1.000000");
    }

    #[test]
    fn test_atom_rows() {
        let rows = atom_rows(&sample_model());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].element, "O");
        assert_eq!(rows[2].atomic_number, "1");
        assert_eq!(rows[1].reduced, "0.5000 0.0000 0.0000");
    }

    #[test]
    fn test_highsym_rows() {
        let rows = highsym_rows(&sample_model(), 1);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].index, "3");
        assert_eq!(rows[1].label, "U|X");
        assert_eq!(rows[1].reduced, "0.0000 1.0000 0.0000");
        assert_eq!(rows[1].frequencies, format!("{:.2}", 3.0 * crate::models::THZ_TO_CM1));
    }
}
