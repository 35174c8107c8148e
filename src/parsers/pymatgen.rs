//! # pymatgen 声子能带 JSON 解析器
//!
//! 解析 `PhononBandStructureSymmLine.as_dict()` 输出，规范化为内部模型。
//!
//! ## 流程
//! 1. 晶格 -> 倒格子
//! 2. 位点 -> 原子类型、原子序数、坐标；按原子计数生成名称
//! 3. 约化 q 点与高对称点 -> 笛卡尔坐标（倒格子基矢）
//! 4. 标记高对称点，重建累计距离与路径段 (`parsers/qpath.rs`)
//! 5. 频率 [band][q] (THz) -> [q][band] (cm⁻¹)
//! 6. 本征位移 real/imag [band][q][atom][xyz] -> [q][band][atom][xyz][re, im]，乘以缩放因子
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 调用
//! - 使用 `parsers/qpath.rs`, `parsers/path_index.rs`, `parsers/elements.rs`
//! - 使用 `math/`, `models/`

use crate::error::{PhononError, Result};
use crate::math::{reduced_to_cartesian_list, Mat3, Vec3};
use crate::models::{
    Atom, BandData, ComplexVec3, EigenDisplacements, Lattice, PhononModel, QPath, THZ_TO_CM1,
};
use crate::parsers::elements::ElementTable;
use crate::parsers::path_index::{build_highsym, build_qindex};
use crate::parsers::qpath::{mark_high_symmetry, reconstruct_path};
use crate::parsers::NormalizeOptions;

use serde::Deserialize;
use serde_json::{Map, Value};

/// 格式名（用于错误信息）
pub const SCHEMA: &str = "pymatgen";

/// pymatgen 文档中用于识别格式的键
pub const CLASS_KEY: &str = "@class";

/// [band][q][atom][xyz]
pub type BandMajorTensor = Vec<Vec<Vec<Vec3>>>;

#[derive(Debug, Clone, Deserialize)]
pub struct PymatgenDocument {
    pub structure: PymatgenStructure,
    /// 约化 q 点
    pub qpoints: Vec<Vec3>,
    /// 标签 -> 约化坐标，保持文档顺序
    pub labels_dict: Map<String, Value>,
    /// [band][q]，THz
    pub bands: Vec<Vec<f64>>,
    pub eigendisplacements: PymatgenEigendisplacements,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PymatgenStructure {
    pub lattice: PymatgenLattice,
    pub sites: Vec<PymatgenSite>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PymatgenLattice {
    pub matrix: Mat3,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PymatgenSite {
    pub label: String,
    pub xyz: Vec3,
    pub abc: Vec3,
    /// 位点物种，原子序数取自第一个物种
    #[serde(default)]
    pub species: Vec<PymatgenSpecies>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PymatgenSpecies {
    pub element: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PymatgenEigendisplacements {
    pub real: BandMajorTensor,
    pub imag: BandMajorTensor,
}

/// 从 JSON 值解析 pymatgen 文档
pub fn parse_document(value: Value) -> Result<PymatgenDocument> {
    serde_json::from_value(value).map_err(|e| PhononError::schema(SCHEMA, e.to_string()))
}

/// 将 pymatgen 文档规范化为模型
pub fn normalize(
    doc: PymatgenDocument,
    options: &NormalizeOptions,
    elements: &ElementTable,
) -> Result<PhononModel> {
    // 晶格
    let lattice = Lattice::from_vectors(doc.structure.lattice.matrix);
    let rlat = lattice.reciprocal()?;

    // 原子
    let atoms = collect_atoms(&doc.structure.sites, elements);
    let natoms = atoms.len();
    let atom_types: Vec<String> = atoms.iter().map(|a| a.element.clone()).collect();
    let atom_numbers: Vec<Option<u32>> = atoms.iter().map(|a| a.atomic_number).collect();
    let name = chemical_formula(&atom_types);

    let mut atomic_numbers: Vec<u32> = atom_numbers.iter().flatten().copied().collect();
    atomic_numbers.sort_unstable();
    atomic_numbers.dedup();

    // q 点路径
    let nq = doc.qpoints.len();
    if nq == 0 {
        return Err(PhononError::schema(SCHEMA, "q-point list is empty"));
    }
    let qpoints = reduced_to_cartesian_list(&doc.qpoints, &rlat.matrix);

    let highsym = high_symmetry_points(&doc.labels_dict)?;
    let highsym_red: Vec<Vec3> = highsym.iter().map(|(_, p)| *p).collect();
    let highsym_car: Vec<(String, Vec3)> = highsym
        .iter()
        .map(|(label, _)| label.clone())
        .zip(reduced_to_cartesian_list(&highsym_red, &rlat.matrix))
        .collect();

    let marks = mark_high_symmetry(&qpoints, &highsym_car, options.match_tolerance);
    let layout = reconstruct_path(&qpoints, &marks);

    let highsym_qpts = build_highsym(&layout.labels, &layout.distances)?;
    let qindex = build_qindex(&layout.distances);

    let path = QPath {
        qpoints,
        distances: layout.distances,
        line_breaks: layout.line_breaks,
        highsym_qpts,
        qindex,
    };
    path.check_invariants()?;

    // 频率与本征位移
    let eigenvalues = transpose_bands(&doc.bands, nq)?;
    let vec = transpose_displacements(
        &doc.eigendisplacements,
        doc.bands.len(),
        nq,
        natoms,
        options.displacement_scale,
    )?;

    let model = PhononModel {
        formula: name.clone(),
        name,
        natoms,
        atom_types,
        atom_numbers,
        atomic_numbers,
        atom_pos_car: atoms.iter().map(|a| a.position_car).collect(),
        atom_pos_red: atoms.iter().map(|a| a.position_red).collect(),
        lattice,
        eigenvalues,
        vec,
        path,
        repetitions: options.repetitions,
    };

    model.check_shapes()?;
    Ok(model)
}

/// 位点 -> 原子
///
/// 原子序数优先取 `species[0].element`，缺少物种时才解析位点标签。
/// 哑原子（如 "X"）或无法识别的物种不报错，原子序数记为 None。
fn collect_atoms(sites: &[PymatgenSite], elements: &ElementTable) -> Vec<Atom> {
    sites
        .iter()
        .map(|site| {
            let z = match site.species.first() {
                Some(species) => elements.get(species.element.trim()),
                None => elements.atomic_number(&site.label),
            };
            Atom::new(site.label.clone(), z, site.xyz, site.abc)
        })
        .collect()
}

/// 由原子类型生成名称：按首次出现顺序拼接 "元素+个数"
///
/// `["O", "H", "H"]` -> `"O1H2"`
pub fn chemical_formula(atom_types: &[String]) -> String {
    let counts = atom_types
        .iter()
        .fold(Vec::<(&str, usize)>::new(), |mut counts, label| {
            match counts.iter_mut().find(|(l, _)| *l == label.as_str()) {
                Some((_, n)) => *n += 1,
                None => counts.push((label.as_str(), 1)),
            }
            counts
        });

    counts
        .iter()
        .map(|(label, n)| format!("{}{}", label, n))
        .collect()
}

/// labels_dict -> [(标签, 约化坐标)]，保持文档顺序
fn high_symmetry_points(labels: &Map<String, Value>) -> Result<Vec<(String, Vec3)>> {
    labels
        .iter()
        .map(|(label, point)| {
            let point: Vec3 = serde_json::from_value(point.clone()).map_err(|e| {
                PhononError::schema(SCHEMA, format!("labels_dict['{}']: {}", label, e))
            })?;
            Ok((label.clone(), point))
        })
        .collect()
}

/// [band][q] (THz) -> [q][band] (cm⁻¹)
pub fn transpose_bands(bands: &[Vec<f64>], nq: usize) -> Result<BandData> {
    if bands.is_empty() {
        return Err(PhononError::schema(SCHEMA, "band list is empty"));
    }
    if let Some(band) = bands.iter().find(|b| b.len() != nq) {
        return Err(PhononError::shape("q-points per band", nq, band.len()));
    }

    Ok((0..nq)
        .map(|q| bands.iter().map(|band| band[q] * THZ_TO_CM1).collect())
        .collect())
}

/// real/imag [band][q][atom][xyz] -> [q][band][atom][xyz][re, im]
pub fn transpose_displacements(
    eigendisplacements: &PymatgenEigendisplacements,
    nbands: usize,
    nq: usize,
    natoms: usize,
    scale: f64,
) -> Result<EigenDisplacements> {
    check_tensor_shape("eigendisplacements.real", &eigendisplacements.real, nbands, nq, natoms)?;
    check_tensor_shape("eigendisplacements.imag", &eigendisplacements.imag, nbands, nq, natoms)?;

    let real = &eigendisplacements.real;
    let imag = &eigendisplacements.imag;

    Ok((0..nq)
        .map(|q| {
            (0..nbands)
                .map(|n| {
                    (0..natoms)
                        .map(|a| complex_vector(&real[n][q][a], &imag[n][q][a], scale))
                        .collect()
                })
                .collect()
        })
        .collect())
}

fn complex_vector(real: &Vec3, imag: &Vec3, scale: f64) -> ComplexVec3 {
    [
        [real[0] * scale, imag[0] * scale],
        [real[1] * scale, imag[1] * scale],
        [real[2] * scale, imag[2] * scale],
    ]
}

fn check_tensor_shape(
    field: &str,
    tensor: &BandMajorTensor,
    nbands: usize,
    nq: usize,
    natoms: usize,
) -> Result<()> {
    if tensor.len() != nbands {
        return Err(PhononError::shape(format!("{} bands", field), nbands, tensor.len()));
    }
    for band in tensor {
        if band.len() != nq {
            return Err(PhononError::shape(format!("{} q-points", field), nq, band.len()));
        }
        if let Some(atoms) = band.iter().find(|atoms| atoms.len() != natoms) {
            return Err(PhononError::shape(format!("{} atoms", field), natoms, atoms.len()));
        }
    }
    Ok(())
}
