//! Field Validation - 实体字段校验
//!
//! 每次字段赋值（构造或更新）都必须经过这里的校验函数

use thiserror::Error;

/// 字段校验错误
///
/// `message` 直接作为 API 错误信息返回给调用方
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 出错的字段名
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 校验名称（Scientist.name / Mission.name）
///
/// 去除首尾空白后不能为空；返回原始值
pub fn validate_name(name: impl Into<String>) -> Result<String, ValidationError> {
    non_blank("name", name.into(), "Name cannot be empty.")
}

/// 校验研究领域（仅 Scientist）
pub fn validate_field_of_study(value: impl Into<String>) -> Result<String, ValidationError> {
    non_blank(
        "field_of_study",
        value.into(),
        "Field of study cannot be empty.",
    )
}

/// 校验外键（Mission.scientist_id / Mission.planet_id）
///
/// 缺失或为 0 时报错，错误信息由字段名推导：`scientist_id` -> "Scientist cannot be empty."
pub fn validate_foreign_key(key: &str, value: Option<i64>) -> Result<i64, ValidationError> {
    match value {
        Some(id) if id != 0 => Ok(id),
        _ => Err(ValidationError::new(
            key,
            format!("{} cannot be empty.", title_case(&key.replace("_id", ""))),
        )),
    }
}

fn non_blank(field: &str, value: String, message: &str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, message));
    }
    Ok(value)
}

/// 每个单词首字母大写，其余小写（单词以非字母字符分隔）
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_accepts_value() {
        assert_eq!(validate_name("Ada").unwrap(), "Ada");
    }

    #[test]
    fn test_validate_name_keeps_original_whitespace() {
        assert_eq!(validate_name(" Ada ").unwrap(), " Ada ");
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        for blank in ["", "   ", "\t\n"] {
            let err = validate_name(blank).unwrap_err();
            assert_eq!(err.field(), "name");
            assert_eq!(err.to_string(), "Name cannot be empty.");
        }
    }

    #[test]
    fn test_validate_field_of_study_rejects_blank() {
        let err = validate_field_of_study("  ").unwrap_err();
        assert_eq!(err.field(), "field_of_study");
        assert_eq!(err.message(), "Field of study cannot be empty.");
    }

    #[test]
    fn test_validate_foreign_key() {
        assert_eq!(validate_foreign_key("scientist_id", Some(3)).unwrap(), 3);

        let err = validate_foreign_key("scientist_id", None).unwrap_err();
        assert_eq!(err.to_string(), "Scientist cannot be empty.");

        let err = validate_foreign_key("planet_id", Some(0)).unwrap_err();
        assert_eq!(err.to_string(), "Planet cannot be empty.");
        assert_eq!(err.field(), "planet_id");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("scientist"), "Scientist");
        assert_eq!(title_case("home_planet"), "Home_Planet");
        assert_eq!(title_case("PLANET"), "Planet");
    }
}
