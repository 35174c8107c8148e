//! # 内部 JSON 格式导出
//!
//! 将任意来源的模型写回内部格式。`highsym_qpts` 通过 `qindex` 还原为
//! `[index, label]` 列表，`line_breaks` 总是显式写出，
//! 因此再次加载能得到相同的模型。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `parsers/internal.rs` 的 InternalDocument

use crate::error::{PhononError, Result};
use crate::models::PhononModel;
use crate::parsers::internal::InternalDocument;

use std::fs;
use std::path::Path;

/// 模型 -> 内部格式文档
pub fn to_document(model: &PhononModel) -> InternalDocument {
    let highsym_qpts = model
        .path
        .highsym_qpts
        .iter()
        .filter_map(|(distance, label)| {
            model
                .path
                .qindex
                .get(distance)
                .map(|&index| (index, label.clone()))
        })
        .collect();

    InternalDocument {
        name: model.name.clone(),
        natoms: model.natoms,
        atom_types: model.atom_types.clone(),
        atom_numbers: model.atom_numbers.clone(),
        atomic_numbers: model.atomic_numbers.clone(),
        atom_pos_car: model.atom_pos_car.clone(),
        atom_pos_red: model.atom_pos_red.clone(),
        lattice: model.lattice,
        vectors: model.vec.clone(),
        qpoints: model.path.qpoints.clone(),
        distances: model.path.distances.clone(),
        formula: model.formula.clone(),
        eigenvalues: model.eigenvalues.clone(),
        repetitions: model.repetitions,
        highsym_qpts,
        line_breaks: Some(model.path.line_breaks.clone()),
    }
}

/// 模型 -> JSON 字符串
pub fn to_json_string(model: &PhononModel, pretty: bool) -> Result<String> {
    let doc = to_document(model);
    let json = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    Ok(json)
}

/// 写出内部格式 JSON 文件
pub fn write_json(model: &PhononModel, output_path: &Path, pretty: bool) -> Result<()> {
    let json = to_json_string(model, pretty)?;
    fs::write(output_path, json).map_err(|e| PhononError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}
