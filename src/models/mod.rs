//! # 数据模型模块
//!
//! 定义晶体结构与声子色散路径的统一内部表示。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`export/` 和 `commands/` 使用
//! - 子模块: structure, phonon, units

pub mod phonon;
pub mod structure;
pub mod units;

pub use phonon::{
    BandData, ComplexVec3, EigenDisplacements, LineBreak, PathDistance, PhononModel, QPath,
};
pub use structure::{Atom, Lattice, ReciprocalLattice};
pub use units::{FrequencyUnit, EV_TO_CM1, THZ_TO_CM1};
