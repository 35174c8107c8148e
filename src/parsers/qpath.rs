//! # q 点路径重建
//!
//! 外部格式只给出约化 q 点列表和高对称点坐标，需要重建绘图路径：
//!
//! 1. 标记：每个 q 点与高对称点逐一匹配，得到 `marks[q] = Some(label)`
//! 2. 重建：从第 1 个 q 点开始遍历
//!    - 相邻两个 q 点都被标记且标签不同：路径跳跃。合并标签为
//!      `"<当前>|<前一个>"`，丢弃前一个标记，结束当前路径段，
//!      累计距离不增加
//!    - 否则累计 |q[n] - q[n-1]|
//!
//! 第二步只读取第一步的标记并写入新的列表，不在遍历中删除条目。
//!
//! ## 依赖关系
//! - 被 `parsers/pymatgen.rs` 使用
//! - 使用 `math/vector.rs`, `math/matcher.rs`

use crate::math::vector::distance;
use crate::math::{find_point, Vec3};
use crate::models::LineBreak;

/// 重建后的路径布局
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathLayout {
    /// 累计距离
    pub distances: Vec<f64>,
    /// 路径段
    pub line_breaks: Vec<LineBreak>,
    /// 保留下来的 (q 点索引, 标签)，按索引升序
    pub labels: Vec<(usize, String)>,
}

/// 标记与高对称点重合的 q 点
pub fn mark_high_symmetry(
    qpoints: &[Vec3],
    highsym: &[(String, Vec3)],
    tolerance: f64,
) -> Vec<Option<String>> {
    let points: Vec<Vec3> = highsym.iter().map(|(_, p)| *p).collect();

    qpoints
        .iter()
        .map(|q| find_point(q, &points, tolerance).map(|i| highsym[i].0.clone()))
        .collect()
}

/// 由 q 点和标记重建累计距离、路径段和高对称点标签
pub fn reconstruct_path(qpoints: &[Vec3], marks: &[Option<String>]) -> PathLayout {
    let n = qpoints.len();
    if n == 0 {
        return PathLayout::default();
    }

    let mut distances = Vec::with_capacity(n);
    let mut line_breaks = Vec::new();
    let mut labels = Vec::new();

    let mut dist = 0.0;
    let mut segment_start = 0;
    // 前一个 q 点（n-1）上尚未确定的标签
    let mut pending = marks.first().cloned().flatten();

    distances.push(dist);

    for nq in 1..n {
        let current = marks.get(nq).and_then(Option::as_ref);

        match (current, pending.take()) {
            (Some(cur), Some(prev)) if *cur != prev => {
                line_breaks.push(LineBreak::new(segment_start, nq));
                segment_start = nq;
                pending = Some(format!("{}|{}", cur, prev));
            }
            (current, previous) => {
                dist += distance(&qpoints[nq - 1], &qpoints[nq]);
                if let Some(prev) = previous {
                    labels.push((nq - 1, prev));
                }
                pending = current.cloned();
            }
        }

        distances.push(dist);
    }

    if let Some(last) = pending {
        labels.push((n - 1, last));
    }
    line_breaks.push(LineBreak::new(segment_start, n));

    PathLayout {
        distances,
        line_breaks,
        labels,
    }
}
