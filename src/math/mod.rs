//! # 向量代数模块
//!
//! 三维向量运算、分数/笛卡尔坐标转换与点匹配。
//!
//! ## 依赖关系
//! - 被 `models/structure.rs` 和 `parsers/` 使用
//! - 子模块: vector, coords, matcher

pub mod coords;
pub mod matcher;
pub mod vector;

pub use coords::{reduced_to_cartesian, reduced_to_cartesian_list};
pub use matcher::{find_point, DEFAULT_MATCH_TOLERANCE};
pub use vector::{Mat3, Vec3};
