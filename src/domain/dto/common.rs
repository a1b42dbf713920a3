//! 공통 응답 봉투와 시간 변환 도우미

use chrono::{DateTime, Utc};
use serde::Serialize;

/// API 성공 응답 래퍼
///
/// 모든 성공 응답은 `{data?, message?, status}` 형태를 가집니다.
/// 실패 응답은 [`AppError`](crate::core::errors::AppError)가 따로 만듭니다.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: u16,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
            status: 200,
        }
    }
}

impl ApiResponse<()> {
    /// 본문 없이 상태만 돌려주는 응답
    pub fn ok() -> Self {
        Self {
            data: None,
            message: None,
            status: 200,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            data: None,
            message: Some(message.into()),
            status: 200,
        }
    }
}

/// BSON 시간을 응답용 UTC 시간으로 변환
pub(crate) fn to_utc(value: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::message("Admin Route")).unwrap();

        assert_eq!(json, serde_json::json!({ "message": "Admin Route", "status": 200 }));
    }

    #[test]
    fn test_data_envelope() {
        let json = serde_json::to_value(ApiResponse::success("Blog created")).unwrap();

        assert_eq!(json, serde_json::json!({ "data": "Blog created", "status": 200 }));
    }

    #[test]
    fn test_to_utc_keeps_milliseconds() {
        let bson_time = mongodb::bson::DateTime::from_millis(1_700_000_000_123);

        assert_eq!(to_utc(bson_time).timestamp_millis(), 1_700_000_000_123);
    }
}
