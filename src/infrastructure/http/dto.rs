//! Data Transfer Objects

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::application::{CreateMission, CreateScientist};
use crate::domain::ScientistPatch;

// ============================================================================
// 响应
// ============================================================================

/// 缩进格式的 JSON 响应
#[derive(Debug)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

// ============================================================================
// 宽松字段解析
// ============================================================================

/// 整数或数字字符串均可作为 id；其他值视为缺失
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// 数字按其文本形式接收；null、布尔、数组和对象视为缺失
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// ============================================================================
// Scientist DTOs
// ============================================================================

/// 创建科学家请求；缺失字段由应用层报错
#[derive(Debug, Default, Deserialize)]
pub struct CreateScientistRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub field_of_study: Option<String>,
}

impl From<CreateScientistRequest> for CreateScientist {
    fn from(req: CreateScientistRequest) -> Self {
        Self {
            name: req.name,
            field_of_study: req.field_of_study,
        }
    }
}

/// 部分更新请求
#[derive(Debug, Default, Deserialize)]
pub struct UpdateScientistRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub field_of_study: Option<String>,
}

impl From<UpdateScientistRequest> for ScientistPatch {
    fn from(req: UpdateScientistRequest) -> Self {
        Self {
            name: req.name,
            field_of_study: req.field_of_study,
        }
    }
}

// ============================================================================
// Mission DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CreateMissionRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub scientist_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub planet_id: Option<i64>,
}

impl From<CreateMissionRequest> for CreateMission {
    fn from(req: CreateMissionRequest) -> Self {
        Self {
            name: req.name,
            scientist_id: req.scientist_id,
            planet_id: req.planet_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let req: CreateMissionRequest = serde_json::from_value(json!({"name": "Ares"})).unwrap();
        let command = CreateMission::from(req);
        assert_eq!(command.name.as_deref(), Some("Ares"));
        assert!(command.scientist_id.is_none());
        assert!(command.planet_id.is_none());
    }

    #[test]
    fn test_ids_accept_numeric_strings() {
        let req: CreateMissionRequest = serde_json::from_value(
            json!({"name": "Ares", "scientist_id": " 12 ", "planet_id": 3}),
        )
        .unwrap();
        assert_eq!(req.scientist_id, Some(12));
        assert_eq!(req.planet_id, Some(3));

        let req: CreateMissionRequest = serde_json::from_value(
            json!({"name": "Ares", "scientist_id": "abc", "planet_id": 1.5}),
        )
        .unwrap();
        assert!(req.scientist_id.is_none());
        assert!(req.planet_id.is_none());
    }

    #[test]
    fn test_string_fields_tolerate_other_json_types() {
        let req: CreateScientistRequest =
            serde_json::from_value(json!({"name": 123, "field_of_study": ["Physics"]})).unwrap();
        assert_eq!(req.name.as_deref(), Some("123"));
        assert!(req.field_of_study.is_none());

        let req: UpdateScientistRequest =
            serde_json::from_value(json!({"name": null, "field_of_study": true})).unwrap();
        let patch = ScientistPatch::from(req);
        assert!(patch.name.is_none());
        assert!(patch.field_of_study.is_none());
    }

    #[tokio::test]
    async fn test_pretty_json_response() {
        let response = PrettyJson(json!({"a": 1})).into_response();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            HeaderValue::from_static("application/json")
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), "{\n  \"a\": 1\n}");
    }
}
