//! # 晶体结构数据模型
//!
//! 实空间晶格、倒格子与原子信息。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `models/phonon.rs` 使用
//! - 使用 `math/vector.rs`

use crate::error::{PhononError, Result};
use crate::math::vector::{cross, dot, scale, Mat3, Vec3};

use serde::{Deserialize, Serialize};

/// 相对体积下限 |V| / (|a1||a2||a3|)，不大于该值视为退化晶格
const MIN_RELATIVE_VOLUME: f64 = 1e-10;

/// 晶格参数表示
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a1, a2, a3
    pub matrix: Mat3,
}

impl Lattice {
    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: Mat3) -> Self {
        Lattice { matrix }
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let [a_vec, b_vec, c_vec] = self.matrix;

        let a = dot(&a_vec, &a_vec).sqrt();
        let b = dot(&b_vec, &b_vec).sqrt();
        let c = dot(&c_vec, &c_vec).sqrt();

        let alpha = (dot(&b_vec, &c_vec) / (b * c)).acos().to_degrees();
        let beta = (dot(&a_vec, &c_vec) / (a * c)).acos().to_degrees();
        let gamma = (dot(&a_vec, &b_vec) / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 计算晶格体积 a1 · (a2 × a3)（带符号）
    pub fn volume(&self) -> f64 {
        let [a1, a2, a3] = self.matrix;
        dot(&a1, &cross(&a2, &a3))
    }

    /// 计算倒格子
    ///
    /// b1 = (a2×a3)/V, b2 = (a3×a1)/V, b3 = (a1×a2)/V，不含 2π 因子，
    /// 满足 ai · bj = δij。基矢共面（相对体积接近零）时返回 `DegenerateLattice`，
    /// 与晶格的长度单位无关。
    pub fn reciprocal(&self) -> Result<ReciprocalLattice> {
        let [a1, a2, a3] = self.matrix;
        let b1 = cross(&a2, &a3);
        let b2 = cross(&a3, &a1);
        let b3 = cross(&a1, &a2);
        let volume = dot(&a1, &b1);
        let edge_product: f64 = self.matrix.iter().map(|v| dot(v, v).sqrt()).product();

        if !volume.is_finite() || volume.abs() <= MIN_RELATIVE_VOLUME * edge_product {
            return Err(PhononError::DegenerateLattice { volume });
        }

        let matrix = [
            scale(&b1, 1.0 / volume),
            scale(&b2, 1.0 / volume),
            scale(&b3, 1.0 / volume),
        ];

        if matrix.iter().flatten().any(|x| !x.is_finite()) {
            return Err(PhononError::DegenerateLattice { volume });
        }

        Ok(ReciprocalLattice {
            matrix,
            real: self.matrix,
        })
    }
}

/// 倒格子
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReciprocalLattice {
    /// 倒格矢矩阵，行向量表示 b1, b2, b3
    pub matrix: Mat3,
    /// 对应的实空间晶格
    real: Mat3,
}

impl ReciprocalLattice {
    /// 笛卡尔 q 点转回约化坐标: x_i = q · a_i
    pub fn cartesian_to_reduced(&self, point: &Vec3) -> Vec3 {
        [
            dot(point, &self.real[0]),
            dot(point, &self.real[1]),
            dot(point, &self.real[2]),
        ]
    }
}

/// 原子信息
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// 元素符号（或位点标签）
    pub element: String,

    /// 原子序数，哑原子或无法识别的物种为 None
    pub atomic_number: Option<u32>,

    /// 笛卡尔坐标 (Å)
    pub position_car: Vec3,

    /// 分数坐标
    pub position_red: Vec3,
}

impl Atom {
    pub fn new(
        element: impl Into<String>,
        atomic_number: Option<u32>,
        position_car: Vec3,
        position_red: Vec3,
    ) -> Self {
        Atom {
            element: element.into(),
            atomic_number,
            position_car,
            position_red,
        }
    }
}
