//! # 点匹配
//!
//! 在参考点列表中线性查找给定笛卡尔坐标点（容差内）。
//! 参考列表是高对称点，通常少于 20 个，线性扫描足够。
//!
//! ## 依赖关系
//! - 被 `parsers/pymatgen.rs` 使用
//! - 使用 `math/vector.rs`

use super::vector::{distance, Vec3};

/// 默认匹配容差
pub const DEFAULT_MATCH_TOLERANCE: f64 = 1e-4;

/// 返回第一个与 `point` 距离小于 `tolerance` 的候选点索引
pub fn find_point(point: &Vec3, candidates: &[Vec3], tolerance: f64) -> Option<usize> {
    candidates
        .iter()
        .position(|c| distance(point, c) < tolerance)
}
