//! # 路径索引
//!
//! 由累计距离序列构建 距离 -> 索引 和 距离 -> 标签 两个查找表，
//! 内部格式与外部格式解析器共用。
//!
//! ## 依赖关系
//! - 被 `parsers/internal.rs`, `parsers/pymatgen.rs` 使用
//! - 使用 `models/phonon.rs`

use crate::error::{PhononError, Result};
use crate::models::PathDistance;

use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// 构建 距离 -> 索引 映射
///
/// 按顺序写入，重复距离（路径跳跃处）保留最后一个索引。
pub fn build_qindex(distances: &[f64]) -> BTreeMap<PathDistance, usize> {
    distances
        .iter()
        .enumerate()
        .fold(BTreeMap::new(), |mut qindex, (i, d)| {
            qindex.insert(OrderedFloat(*d), i);
            qindex
        })
}

/// 将 (q 点索引, 标签) 列表改写为 距离 -> 标签 映射
///
/// 按给定顺序写入，同一距离后出现的标签覆盖先出现的。
pub fn build_highsym(
    labels: &[(usize, String)],
    distances: &[f64],
) -> Result<BTreeMap<PathDistance, String>> {
    labels
        .iter()
        .try_fold(BTreeMap::new(), |mut highsym, (index, label)| {
            let distance = distances.get(*index).ok_or_else(|| {
                PhononError::InvalidPath(format!(
                    "high-symmetry point '{}' refers to q-point {} but the path has {}",
                    label,
                    index,
                    distances.len()
                ))
            })?;
            highsym.insert(OrderedFloat(*distance), label.clone());
            Ok(highsym)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qindex_inverts_distances() {
        let distances = [0.0, 0.25, 0.5, 1.0];
        let qindex = build_qindex(&distances);
        for (i, d) in distances.iter().enumerate() {
            assert_eq!(qindex[&OrderedFloat(*d)], i);
        }
    }

    #[test]
    fn test_qindex_last_duplicate_wins() {
        let qindex = build_qindex(&[0.0, 1.0, 1.0, 2.0]);
        assert_eq!(qindex.len(), 3);
        assert_eq!(qindex[&OrderedFloat(1.0)], 2);
    }

    #[test]
    fn test_highsym_rekeys_by_distance() {
        let distances = [0.0, 0.5, 1.0, 1.0, 1.7];
        let labels = vec![
            (0, "Γ".to_string()),
            (2, "X".to_string()),
            (3, "U|X".to_string()),
            (4, "M".to_string()),
        ];
        let highsym = build_highsym(&labels, &distances).unwrap();
        assert_eq!(highsym.len(), 3);
        assert_eq!(highsym[&OrderedFloat(0.0)], "Γ");
        assert_eq!(highsym[&OrderedFloat(1.0)], "U|X");
        assert_eq!(highsym[&OrderedFloat(1.7)], "M");
    }

    #[test]
    fn test_highsym_index_out_of_range() {
        let labels = vec![(5, "K".to_string())];
        assert!(matches!(
            build_highsym(&labels, &[0.0, 1.0]),
            Err(PhononError::InvalidPath(_))
        ));
    }
}
