//! # 解析器模块
//!
//! 将原始 JSON 文本规范化为 `PhononModel`。
//!
//! ## 流程
//! ```text
//! 文本 ──> JSON ──> (REST 包装解包) ──> SchemaKind::detect
//!                                        ├── Internal ──> internal::normalize
//!                                        └── External ──> pymatgen::normalize
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: internal, pymatgen, qpath, path_index, elements

pub mod elements;
pub mod internal;
pub mod path_index;
pub mod pymatgen;
pub mod qpath;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::error::{PhononError, Result};
use crate::math::DEFAULT_MATCH_TOLERANCE;
use crate::models::PhononModel;

use elements::PERIODIC_TABLE;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// 本征位移默认缩放因子（可视化用）
pub const DEFAULT_DISPLACEMENT_SCALE: f64 = 200.0;

/// 外部格式默认周期重复次数
pub const DEFAULT_REPETITIONS: [u32; 3] = [3, 3, 3];

/// REST 响应中包裹文档的键
const REST_RESPONSE_KEY: &str = "response";

/// 规范化参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeOptions {
    /// 本征位移缩放因子
    pub displacement_scale: f64,
    /// 高对称点匹配容差
    pub match_tolerance: f64,
    /// 外部格式的周期重复次数
    pub repetitions: [u32; 3],
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            displacement_scale: DEFAULT_DISPLACEMENT_SCALE,
            match_tolerance: DEFAULT_MATCH_TOLERANCE,
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

/// 输入包装方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputEnvelope {
    /// 文档本身
    #[default]
    Bare,
    /// REST 响应 `{"response": {...}}`
    Rest,
}

/// JSON 格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// 内部规范格式
    Internal,
    /// pymatgen 导出格式（带 `@class` 键）
    External,
}

impl SchemaKind {
    /// 根据顶层键判断格式
    pub fn detect(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            PhononError::schema("phonon", "top-level JSON value is not an object")
        })?;

        if object.contains_key(pymatgen::CLASS_KEY) {
            Ok(SchemaKind::External)
        } else {
            Ok(SchemaKind::Internal)
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaKind::Internal => write!(f, "{}", internal::SCHEMA),
            SchemaKind::External => write!(f, "{}", pymatgen::SCHEMA),
        }
    }
}

/// 从 JSON 文本加载模型
pub fn load_from_str(text: &str, options: &NormalizeOptions) -> Result<PhononModel> {
    load_from_str_with_envelope(text, InputEnvelope::Bare, options)
}

/// 从 JSON 文本加载模型，按需解开 REST 包装
pub fn load_from_str_with_envelope(
    text: &str,
    envelope: InputEnvelope,
    options: &NormalizeOptions,
) -> Result<PhononModel> {
    let value: Value = serde_json::from_str(text)?;
    let value = unwrap_envelope(value, envelope)?;
    load_from_value(value, options)
}

/// 从已解析的 JSON 值加载模型
pub fn load_from_value(value: Value, options: &NormalizeOptions) -> Result<PhononModel> {
    match SchemaKind::detect(&value)? {
        SchemaKind::Internal => internal::normalize(internal::parse_document(value)?),
        SchemaKind::External => {
            pymatgen::normalize(pymatgen::parse_document(value)?, options, &PERIODIC_TABLE)
        }
    }
}

/// 加载完成后调用 `on_loaded`
///
/// 成功时回调恰好执行一次；失败时直接返回错误，不调用回调。
pub fn load_with<F>(
    text: &str,
    envelope: InputEnvelope,
    options: &NormalizeOptions,
    on_loaded: F,
) -> Result<()>
where
    F: FnOnce(PhononModel),
{
    let model = load_from_str_with_envelope(text, envelope, options)?;
    on_loaded(model);
    Ok(())
}

/// 从本地文件加载模型
pub fn load_file(
    path: &Path,
    envelope: InputEnvelope,
    options: &NormalizeOptions,
) -> Result<PhononModel> {
    let content = read_file(path)?;
    load_from_str_with_envelope(&content, envelope, options)
}

/// 读取文件文本
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PhononError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    fs::read_to_string(path).map_err(|e| PhononError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 解开 REST 响应包装
fn unwrap_envelope(value: Value, envelope: InputEnvelope) -> Result<Value> {
    match envelope {
        InputEnvelope::Bare => Ok(value),
        InputEnvelope::Rest => match value {
            Value::Object(mut object) => object.remove(REST_RESPONSE_KEY).ok_or_else(|| {
                PhononError::schema("REST", format!("missing '{}' field", REST_RESPONSE_KEY))
            }),
            _ => Err(PhononError::schema(
                "REST",
                "response body is not a JSON object",
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::fixtures::{INTERNAL_SI, PYMATGEN_CUBIC};

    #[test]
    fn test_detect_schema() {
        let internal: Value = serde_json::from_str(INTERNAL_SI).unwrap();
        let external: Value = serde_json::from_str(PYMATGEN_CUBIC).unwrap();
        assert_eq!(SchemaKind::detect(&internal).unwrap(), SchemaKind::Internal);
        assert_eq!(SchemaKind::detect(&external).unwrap(), SchemaKind::External);
        assert!(SchemaKind::detect(&Value::Array(vec![])).is_err());
    }

    #[test]
    fn test_load_both_schemas() {
        let options = NormalizeOptions::default();
        let si = load_from_str(INTERNAL_SI, &options).unwrap();
        assert_eq!(si.name, "Si2");

        let oh = load_from_str(PYMATGEN_CUBIC, &options).unwrap();
        assert_eq!(oh.name, "O1H2");
        assert_eq!(oh.path.line_breaks.len(), 2);
    }

    #[test]
    fn test_malformed_json() {
        let err = load_from_str("{\"name\": ", &NormalizeOptions::default()).unwrap_err();
        assert!(matches!(err, PhononError::JsonError(_)));
    }

    #[test]
    fn test_unknown_shape_fails_as_internal() {
        let err = load_from_str("{\"foo\": 1}", &NormalizeOptions::default()).unwrap_err();
        assert!(matches!(err, PhononError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_rest_envelope() {
        let wrapped = format!("{{\"response\": {}}}", PYMATGEN_CUBIC);
        let model =
            load_from_str_with_envelope(&wrapped, InputEnvelope::Rest, &NormalizeOptions::default())
                .unwrap();
        assert_eq!(model.natoms, 3);

        let err = load_from_str_with_envelope(
            PYMATGEN_CUBIC,
            InputEnvelope::Rest,
            &NormalizeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PhononError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_callback_runs_once_on_success() {
        let mut calls = 0;
        load_with(
            INTERNAL_SI,
            InputEnvelope::Bare,
            &NormalizeOptions::default(),
            |model| {
                calls += 1;
                assert_eq!(model.nqpoints(), 3);
            },
        )
        .unwrap();
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_callback_skipped_on_failure() {
        let mut called = false;
        let result = load_with(
            "{\"@class\": \"PhononBandStructureSymmLine\"}",
            InputEnvelope::Bare,
            &NormalizeOptions::default(),
            |_| called = true,
        );
        assert!(result.is_err());
        assert!(!called);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file(
            Path::new("/nonexistent/phonon.json"),
            InputEnvelope::Bare,
            &NormalizeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PhononError::FileNotFound { .. }));
    }
}
