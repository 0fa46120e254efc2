//! i18n - 번역 capability
//!
//! 로케일 문서(JSON 객체)에서 키를 찾아 번역합니다. 문서가 없거나 키가 없으면
//! 키 자체를 반환합니다.
//!
//! ```ignore
//! let t = Translator::new(json!({ "greet": "Hello, {name}!" }));
//! assert_eq!(t.t_with("greet", &[("name", "Ann")]), "Hello, Ann!");
//! ```

use serde_json::{Map, Value};

/// 번역기
#[derive(Debug, Clone, Default)]
pub struct Translator {
    entries: Map<String, Value>,
}

impl Translator {
    /// 로케일 문서로 생성 (객체가 아니면 빈 번역기)
    pub fn new(document: Value) -> Self {
        match document {
            Value::Object(entries) => Self { entries },
            _ => Self::default(),
        }
    }

    /// 빈 번역기 (항상 키 반환)
    pub fn identity() -> Self {
        Self::default()
    }

    /// 번역
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    /// `{name}` 자리표시자를 치환하여 번역
    pub fn t_with(&self, key: &str, replacements: &[(&str, &str)]) -> String {
        let mut text = match self.entries.get(key) {
            Some(Value::String(s)) => s.clone(),
            _ => key.to_string(),
        };
        for (name, value) in replacements {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }

    /// 키 존재 여부
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
