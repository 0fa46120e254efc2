//! AppResult - UI 응답과 로그에 공통으로 쓰는 결과 형식

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 애플리케이션 실행 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppResult {
    /// 결과 내용 (줄 단위)
    pub content: Vec<String>,

    /// 우선순위 (높을수록 중요)
    #[serde(default)]
    pub priority: i32,

    /// 추가 메타데이터
    #[serde(default = "empty_meta")]
    pub meta: Value,

    /// 에러 메시지 (에러 결과인 경우)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn empty_meta() -> Value {
    Value::Object(Default::default())
}

impl AppResult {
    /// 새 결과 생성
    pub fn new(content: Vec<String>) -> Self {
        Self {
            content,
            priority: 0,
            meta: empty_meta(),
            error: None,
        }
    }

    /// 에러 결과 생성
    pub fn failed(error: impl std::fmt::Display) -> Self {
        let message = error.to_string();
        Self {
            error: Some(message.clone()),
            ..Self::new(vec![message])
        }
    }

    /// 우선순위 설정
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// 메타데이터 설정
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = meta;
        self
    }

    /// 에러 결과 여부
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl Default for AppResult {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<String> for AppResult {
    fn from(content: String) -> Self {
        Self::new(vec![content])
    }
}

impl From<&str> for AppResult {
    fn from(content: &str) -> Self {
        Self::new(vec![content.to_string()])
    }
}

impl From<Vec<String>> for AppResult {
    fn from(content: Vec<String>) -> Self {
        Self::new(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_line_content() {
        let result = AppResult::from("Hello");
        assert_eq!(result.content, vec!["Hello"]);
        assert_eq!(result.priority, 0);
        assert_eq!(result.meta, json!({}));
        assert!(!result.is_error());
    }

    #[test]
    fn test_builder() {
        let result = AppResult::from(vec!["a".to_string(), "b".to_string()])
            .with_priority(2)
            .with_meta(json!({ "source": "test" }));

        assert_eq!(result.content.len(), 2);
        assert_eq!(result.priority, 2);
        assert_eq!(result.meta["source"], "test");
    }

    #[test]
    fn test_failed() {
        let result = AppResult::failed("boom");
        assert!(result.is_error());
        assert_eq!(result.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let result: AppResult = serde_json::from_value(json!({ "content": ["x"] })).unwrap();
        assert_eq!(result, AppResult::from("x"));
    }
}
