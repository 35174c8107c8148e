//! # 坐标转换
//!
//! 分数坐标（约化坐标）到笛卡尔坐标的转换。基矢可以是实空间晶格，
//! 也可以是倒格子（q 点路径使用后者）。
//!
//! ## 依赖关系
//! - 被 `parsers/pymatgen.rs` 使用
//! - 使用 `math/vector.rs`

use super::vector::{Mat3, Vec3};

/// 分数坐标转笛卡尔坐标: r = x*a1 + y*a2 + z*a3
pub fn reduced_to_cartesian(point: &Vec3, basis: &Mat3) -> Vec3 {
    [
        point[0] * basis[0][0] + point[1] * basis[1][0] + point[2] * basis[2][0],
        point[0] * basis[0][1] + point[1] * basis[1][1] + point[2] * basis[2][1],
        point[0] * basis[0][2] + point[1] * basis[1][2] + point[2] * basis[2][2],
    ]
}

/// 批量转换，保持顺序和长度
pub fn reduced_to_cartesian_list(points: &[Vec3], basis: &Mat3) -> Vec<Vec3> {
    points
        .iter()
        .map(|p| reduced_to_cartesian(p, basis))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_to_cartesian_hexagonal() {
        let basis = [[2.0, 0.0, 0.0], [-1.0, 3f64.sqrt(), 0.0], [0.0, 0.0, 5.0]];
        let car = reduced_to_cartesian(&[0.5, 0.5, 0.5], &basis);
        assert!((car[0] - 0.5).abs() < 1e-12);
        assert!((car[1] - 3f64.sqrt() / 2.0).abs() < 1e-12);
        assert!((car[2] - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_list_preserves_order() {
        let basis = [[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]];
        let red = vec![[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let car = reduced_to_cartesian_list(&red, &basis);
        assert_eq!(car, vec![[0.0, 0.0, 4.0], [2.0, 0.0, 0.0], [0.0, 3.0, 0.0]]);
    }
}
