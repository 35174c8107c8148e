//! # 三维向量运算
//!
//! 纯函数实现：叉积、点积、缩放和欧氏距离。
//!
//! ## 依赖关系
//! - 被 `math/coords.rs`, `math/matcher.rs`, `models/structure.rs` 使用
//! - 无外部依赖

/// 三维向量
pub type Vec3 = [f64; 3];

/// 3x3 矩阵，行向量存储
pub type Mat3 = [[f64; 3]; 3];

/// 向量叉积
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// 向量点积
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// 向量数乘
pub fn scale(v: &Vec3, k: f64) -> Vec3 {
    [v[0] * k, v[1] * k, v[2] * k]
}

/// 欧氏距离 |a - b|
pub fn distance(a: &Vec3, b: &Vec3) -> f64 {
    let d = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
    dot(&d, &d).sqrt()
}
