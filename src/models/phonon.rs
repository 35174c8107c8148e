//! # 声子色散数据模型
//!
//! `PhononModel` 是一次加载的最终产物：结构信息、按 q 点排列的频率与
//! 本征位移，以及绘制能带路径所需的 q 点路径 (`QPath`)。
//! 模型构建后不再修改，重新加载会得到新的模型。
//!
//! ## 数据布局
//! ```text
//! eigenvalues[q][band]                       频率 (cm⁻¹)
//! vec[q][band][atom][xyz] = [real, imag]     本征位移（已缩放）
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/`、`export/`、`commands/` 使用
//! - 使用 `models/structure.rs`

use crate::error::{PhononError, Result};
use crate::math::Vec3;
use crate::models::structure::{Atom, Lattice};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 路径累计距离，作为映射键使用
pub type PathDistance = OrderedFloat<f64>;

/// 频率数据 [q][band]，单位 cm⁻¹
pub type BandData = Vec<Vec<f64>>;

/// 单个原子的复位移向量 [xyz][real, imag]
pub type ComplexVec3 = [[f64; 2]; 3];

/// 本征位移 [q][band][atom]
pub type EigenDisplacements = Vec<Vec<Vec<ComplexVec3>>>;

/// 路径段的半开区间 [start, end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct LineBreak {
    pub start: usize,
    pub end: usize,
}

impl LineBreak {
    pub fn new(start: usize, end: usize) -> Self {
        LineBreak { start, end }
    }

    /// 段内 q 点数
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

impl From<[usize; 2]> for LineBreak {
    fn from(pair: [usize; 2]) -> Self {
        LineBreak::new(pair[0], pair[1])
    }
}

impl From<LineBreak> for [usize; 2] {
    fn from(lb: LineBreak) -> Self {
        [lb.start, lb.end]
    }
}

/// q 点路径
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QPath {
    /// 笛卡尔 q 点
    pub qpoints: Vec<Vec3>,

    /// 累计路径长度，与 qpoints 等长，distances[0] = 0
    pub distances: Vec<f64>,

    /// 路径段划分，连续覆盖 [0, qpoints.len())
    pub line_breaks: Vec<LineBreak>,

    /// 距离 -> 高对称点标签
    pub highsym_qpts: BTreeMap<PathDistance, String>,

    /// 距离 -> q 点索引（重复距离取最后一个索引）
    pub qindex: BTreeMap<PathDistance, usize>,
}

impl QPath {
    /// q 点数
    pub fn len(&self) -> usize {
        self.qpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qpoints.is_empty()
    }

    /// 由累计距离查找 q 点索引
    pub fn index_at(&self, distance: f64) -> Option<usize> {
        self.qindex.get(&OrderedFloat(distance)).copied()
    }

    /// 由累计距离查找高对称点标签
    pub fn label_at(&self, distance: f64) -> Option<&str> {
        self.highsym_qpts
            .get(&OrderedFloat(distance))
            .map(String::as_str)
    }

    /// 按路径段切分的累计距离
    pub fn segments(&self) -> impl Iterator<Item = (LineBreak, &[f64])> + '_ {
        self.line_breaks
            .iter()
            .map(move |lb| (*lb, &self.distances[lb.start..lb.end]))
    }

    /// 检查路径不变量
    ///
    /// - distances 与 qpoints 等长
    /// - line_breaks 连续、非空且恰好覆盖 [0, n)
    /// - qindex[distances[i]] 是该距离最后一次出现的索引
    pub fn check_invariants(&self) -> Result<()> {
        let n = self.qpoints.len();

        if self.distances.len() != n {
            return Err(PhononError::shape("distances", n, self.distances.len()));
        }

        validate_line_breaks(&self.line_breaks, n)?;

        for (i, d) in self.distances.iter().enumerate() {
            match self.qindex.get(&OrderedFloat(*d)) {
                Some(&j) if j >= i && self.distances.get(j) == Some(d) => {}
                _ => {
                    return Err(PhononError::InvalidPath(format!(
                        "qindex does not map distance {} back to index {}",
                        d, i
                    )))
                }
            }
        }

        Ok(())
    }
}

/// 检查路径段划分是否连续覆盖 [0, n)
pub fn validate_line_breaks(line_breaks: &[LineBreak], n: usize) -> Result<()> {
    let mut expected_start = 0;

    for lb in line_breaks {
        if lb.start != expected_start || lb.end <= lb.start {
            return Err(PhononError::InvalidPath(format!(
                "line break [{}, {}) does not continue from index {}",
                lb.start, lb.end, expected_start
            )));
        }
        expected_start = lb.end;
    }

    if expected_start != n {
        return Err(PhononError::InvalidPath(format!(
            "line breaks cover [0, {}) but the path has {} q-points",
            expected_start, n
        )));
    }

    Ok(())
}

/// 声子色散模型
#[derive(Debug, Clone, PartialEq)]
pub struct PhononModel {
    /// 名称（外部格式由原子计数生成）
    pub name: String,

    /// 化学式
    pub formula: String,

    /// 原子数
    pub natoms: usize,

    /// 每个原子的元素标签
    pub atom_types: Vec<String>,

    /// 每个原子的原子序数，无法识别的物种为 None
    pub atom_numbers: Vec<Option<u32>>,

    /// 出现过的原子序数（去重升序）
    pub atomic_numbers: Vec<u32>,

    /// 笛卡尔坐标
    pub atom_pos_car: Vec<Vec3>,

    /// 分数坐标
    pub atom_pos_red: Vec<Vec3>,

    /// 实空间晶格
    pub lattice: Lattice,

    /// 频率 [q][band]，cm⁻¹
    pub eigenvalues: BandData,

    /// 本征位移 [q][band][atom]
    pub vec: EigenDisplacements,

    /// q 点路径
    pub path: QPath,

    /// 可视化时的周期重复次数
    pub repetitions: [u32; 3],
}

impl PhononModel {
    /// q 点数
    pub fn nqpoints(&self) -> usize {
        self.path.len()
    }

    /// 能带数
    pub fn nbands(&self) -> usize {
        self.eigenvalues.first().map(Vec::len).unwrap_or(0)
    }

    /// 逐原子视图
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        (0..self.natoms).map(move |i| {
            Atom::new(
                self.atom_types[i].clone(),
                self.atom_numbers[i],
                self.atom_pos_car[i],
                self.atom_pos_red[i],
            )
        })
    }

    /// 检查各数组形状是否一致
    pub fn check_shapes(&self) -> Result<()> {
        let natoms = self.natoms;
        for (field, len) in [
            ("atom_types", self.atom_types.len()),
            ("atom_numbers", self.atom_numbers.len()),
            ("atom_pos_car", self.atom_pos_car.len()),
            ("atom_pos_red", self.atom_pos_red.len()),
        ] {
            if len != natoms {
                return Err(PhononError::shape(field, natoms, len));
            }
        }

        let nq = self.nqpoints();
        if self.eigenvalues.len() != nq {
            return Err(PhononError::shape("eigenvalues", nq, self.eigenvalues.len()));
        }
        if self.vec.len() != nq {
            return Err(PhononError::shape("eigenvectors", nq, self.vec.len()));
        }

        let nbands = self.nbands();
        for (eig_q, vec_q) in self.eigenvalues.iter().zip(&self.vec) {
            if eig_q.len() != nbands {
                return Err(PhononError::shape("bands per q-point", nbands, eig_q.len()));
            }
            if vec_q.len() != nbands {
                return Err(PhononError::shape("eigenvector bands", nbands, vec_q.len()));
            }
            if let Some(atoms) = vec_q.iter().find(|atoms| atoms.len() != natoms) {
                return Err(PhononError::shape("eigenvector atoms", natoms, atoms.len()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_with(distances: Vec<f64>, line_breaks: Vec<LineBreak>) -> QPath {
        let qindex = distances
            .iter()
            .enumerate()
            .map(|(i, d)| (OrderedFloat(*d), i))
            .collect();
        QPath {
            qpoints: vec![[0.0; 3]; distances.len()],
            distances,
            line_breaks,
            highsym_qpts: BTreeMap::new(),
            qindex,
        }
    }

    #[test]
    fn test_line_break_serializes_as_pair() {
        let lb = LineBreak::new(2, 7);
        assert_eq!(serde_json::to_string(&lb).unwrap(), "[2,7]");
        let back: LineBreak = serde_json::from_str("[0,4]").unwrap();
        assert_eq!(back, LineBreak::new(0, 4));
        assert_eq!(back.len(), 4);
        assert!(back.contains(3));
        assert!(!back.contains(4));
    }

    #[test]
    fn test_invariants_accept_duplicate_distance() {
        let path = path_with(
            vec![0.0, 1.0, 1.0, 2.0],
            vec![LineBreak::new(0, 2), LineBreak::new(2, 4)],
        );
        path.check_invariants().unwrap();
        assert_eq!(path.index_at(1.0), Some(2));
    }

    #[test]
    fn test_invariants_reject_gap_in_line_breaks() {
        let path = path_with(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![LineBreak::new(0, 1), LineBreak::new(2, 4)],
        );
        assert!(matches!(
            path.check_invariants(),
            Err(PhononError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_invariants_reject_short_cover() {
        assert!(validate_line_breaks(&[LineBreak::new(0, 3)], 4).is_err());
        assert!(validate_line_breaks(&[LineBreak::new(0, 4)], 4).is_ok());
    }

    #[test]
    fn test_segments_slice_distances() {
        let path = path_with(
            vec![0.0, 0.5, 0.5, 1.5],
            vec![LineBreak::new(0, 2), LineBreak::new(2, 4)],
        );
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].1, &[0.0, 0.5]);
        assert_eq!(segments[1].1, &[0.5, 1.5]);
    }
}
