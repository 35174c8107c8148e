//! # 内部 JSON 格式解析器
//!
//! 内部格式已经是规范布局（q 点优先的频率和本征位移），只需逐字段复制，
//! 再由累计距离重建 `qindex` 和 `highsym_qpts`。
//!
//! ## 格式说明
//! ```text
//! {
//!   "name": "...", "formula": "...", "natoms": 2,
//!   "atom_types": [...], "atom_numbers": [...], "atomic_numbers": [...],
//!   "atom_pos_car": [[x,y,z], ...], "atom_pos_red": [[x,y,z], ...],
//!   "lattice": [[..],[..],[..]],
//!   "qpoints": [[qx,qy,qz], ...],            笛卡尔
//!   "distances": [0.0, ...],
//!   "eigenvalues": [[...], ...],             [q][band] cm⁻¹
//!   "vectors": [[[[[re,im] x3] ...]]],       [q][band][atom][xyz][re,im]
//!   "repetitions": [3,3,3],
//!   "highsym_qpts": [[index, "label"], ...], 可选
//!   "line_breaks": [[start, end], ...]       可选
//! }
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 调用，`export/internal.rs` 复用文档结构
//! - 使用 `parsers/path_index.rs`, `models/`

use crate::error::{PhononError, Result};
use crate::math::Vec3;
use crate::models::{BandData, EigenDisplacements, Lattice, LineBreak, PhononModel, QPath};
use crate::parsers::path_index::{build_highsym, build_qindex};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 格式名（用于错误信息）
pub const SCHEMA: &str = "internal";

/// 内部格式文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalDocument {
    pub name: String,
    pub natoms: usize,
    pub atom_types: Vec<String>,
    pub atom_numbers: Vec<Option<u32>>,
    pub atomic_numbers: Vec<u32>,
    pub atom_pos_car: Vec<Vec3>,
    pub atom_pos_red: Vec<Vec3>,
    pub lattice: Lattice,
    pub vectors: EigenDisplacements,
    pub qpoints: Vec<Vec3>,
    pub distances: Vec<f64>,
    pub formula: String,
    pub eigenvalues: BandData,
    pub repetitions: [u32; 3],
    #[serde(default)]
    pub highsym_qpts: Vec<(usize, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_breaks: Option<Vec<LineBreak>>,
}

/// 从 JSON 值解析内部格式文档
pub fn parse_document(value: Value) -> Result<InternalDocument> {
    serde_json::from_value(value).map_err(|e| PhononError::schema(SCHEMA, e.to_string()))
}

/// 将内部格式文档规范化为模型
pub fn normalize(doc: InternalDocument) -> Result<PhononModel> {
    let nq = doc.qpoints.len();
    if nq == 0 {
        return Err(PhononError::schema(SCHEMA, "q-point list is empty"));
    }
    if doc.distances.len() != nq {
        return Err(PhononError::shape("distances", nq, doc.distances.len()));
    }

    let qindex = build_qindex(&doc.distances);
    let highsym_qpts = build_highsym(&doc.highsym_qpts, &doc.distances)?;

    let line_breaks = doc
        .line_breaks
        .unwrap_or_else(|| vec![LineBreak::new(0, nq)]);

    let path = QPath {
        qpoints: doc.qpoints,
        distances: doc.distances,
        line_breaks,
        highsym_qpts,
        qindex,
    };
    path.check_invariants()?;

    let model = PhononModel {
        name: doc.name,
        formula: doc.formula,
        natoms: doc.natoms,
        atom_types: doc.atom_types,
        atom_numbers: doc.atom_numbers,
        atomic_numbers: doc.atomic_numbers,
        atom_pos_car: doc.atom_pos_car,
        atom_pos_red: doc.atom_pos_red,
        lattice: doc.lattice,
        eigenvalues: doc.eigenvalues,
        vec: doc.vectors,
        path,
        repetitions: doc.repetitions,
    };

    model.check_shapes()?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::fixtures::INTERNAL_SI;
    use ordered_float::OrderedFloat;

    fn sample_doc() -> InternalDocument {
        parse_document(serde_json::from_str(INTERNAL_SI).unwrap()).unwrap()
    }

    #[test]
    fn test_normalize_copies_fields() {
        let model = normalize(sample_doc()).unwrap();

        assert_eq!(model.name, "Si2");
        assert_eq!(model.natoms, 2);
        assert_eq!(model.nqpoints(), 3);
        assert_eq!(model.nbands(), 2);
        assert_eq!(model.repetitions, [2, 2, 2]);
        assert_eq!(model.eigenvalues[1], vec![10.0, 498.0]);
        assert_eq!(model.vec[0][1][1], [[0.0, 0.0], [-1.0, 0.0], [0.0, 0.0]]);
    }

    #[test]
    fn test_highsym_keyed_by_distance() {
        let model = normalize(sample_doc()).unwrap();
        assert_eq!(model.path.label_at(0.0), Some("Γ"));
        assert_eq!(model.path.label_at(0.2), Some("X"));
        assert_eq!(model.path.index_at(0.1), Some(1));
        assert_eq!(model.path.highsym_qpts.len(), 2);
        assert_eq!(model.path.qindex[&OrderedFloat(0.2)], 2);
    }

    #[test]
    fn test_default_line_break() {
        let model = normalize(sample_doc()).unwrap();
        assert_eq!(model.path.line_breaks, vec![LineBreak::new(0, 3)]);
        model.path.check_invariants().unwrap();
    }

    #[test]
    fn test_explicit_line_breaks_verbatim() {
        let mut doc = sample_doc();
        doc.line_breaks = Some(vec![LineBreak::new(0, 2), LineBreak::new(2, 3)]);
        let model = normalize(doc).unwrap();
        assert_eq!(
            model.path.line_breaks,
            vec![LineBreak::new(0, 2), LineBreak::new(2, 3)]
        );
    }

    #[test]
    fn test_partial_line_breaks_rejected() {
        let mut doc = sample_doc();
        doc.line_breaks = Some(vec![LineBreak::new(0, 2)]);
        assert!(matches!(normalize(doc), Err(PhononError::InvalidPath(_))));
    }

    #[test]
    fn test_missing_highsym_is_allowed() {
        let mut doc = sample_doc();
        doc.highsym_qpts.clear();
        let model = normalize(doc).unwrap();
        assert!(model.path.highsym_qpts.is_empty());
    }

    #[test]
    fn test_missing_required_field() {
        let mut value: Value = serde_json::from_str(INTERNAL_SI).unwrap();
        value.as_object_mut().unwrap().remove("eigenvalues");
        let err = parse_document(value).unwrap_err();
        assert!(matches!(err, PhononError::SchemaMismatch { .. }));
        assert!(err.to_string().contains("eigenvalues"));
    }

    #[test]
    fn test_distance_count_mismatch() {
        let mut doc = sample_doc();
        doc.distances.pop();
        assert!(matches!(
            normalize(doc),
            Err(PhononError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_band_count_mismatch() {
        let mut doc = sample_doc();
        doc.eigenvalues[2].push(600.0);
        assert!(matches!(
            normalize(doc),
            Err(PhononError::ShapeMismatch { .. })
        ));
    }
}
