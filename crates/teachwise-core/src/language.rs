//! Output language selection.

use serde::{Deserialize, Serialize};

/// Language the model is asked to respond in.
///
/// Deserialization is lenient: only `"traditional_chinese"` selects Chinese;
/// any other string, `null`, or an absent field falls back to English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    TraditionalChinese,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::TraditionalChinese => "traditional_chinese",
        }
    }
}

impl From<Option<String>> for Language {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("traditional_chinese") => Language::TraditionalChinese,
            _ => Language::English,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default)]
        language: Language,
    }

    fn parse(raw: &str) -> Language {
        serde_json::from_str::<Wrapper>(raw).unwrap().language
    }

    #[test]
    fn only_traditional_chinese_selects_chinese() {
        assert_eq!(
            parse(r#"{"language": "traditional_chinese"}"#),
            Language::TraditionalChinese
        );
        assert_eq!(parse(r#"{"language": "english"}"#), Language::English);
        assert_eq!(parse(r#"{"language": "klingon"}"#), Language::English);
        assert_eq!(parse(r#"{"language": null}"#), Language::English);
        assert_eq!(parse("{}"), Language::English);
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_value(Language::TraditionalChinese).unwrap(),
            "traditional_chinese"
        );
    }
}
