//! # Facebook 프로필 모델
//!
//! Facebook Graph API `/me` 응답 중 신원 연결에 필요한 필드만 매핑합니다.
//! 모든 필드는 선택적이며, 필수 여부는 신원 매핑 단계에서 판단합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// 프로필 링크에서 별칭을 추출하는 고정 접두사 패턴 (첫 줄만 사용)
static FACEBOOK_LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^http://www\.facebook\.com/(.+)").unwrap()
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacebookProfile {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    /// `http://www.facebook.com/<alias>` 형태의 프로필 URL
    #[serde(default)]
    pub link: Option<String>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Graph API는 숫자(UTC 오프셋)로 내려주기도 하므로 문자열로 정규화합니다.
    #[serde(default, deserialize_with = "string_or_number")]
    pub timezone: Option<String>,

    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default)]
    pub verified: Option<bool>,

    #[serde(default)]
    pub updated_time: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,
}

impl FacebookProfile {
    /// 프로필 링크가 있으면 별칭 추출을 시도합니다.
    ///
    /// * `None` - 링크 필드가 없음
    /// * `Some(None)` - 링크가 있지만 패턴과 맞지 않음
    /// * `Some(Some(alias))` - 추출 성공
    pub fn alias(&self) -> Option<Option<&str>> {
        self.link.as_deref().map(extract_facebook_alias)
    }
}

/// `http://www.facebook.com/` 뒤의 나머지를 별칭으로 반환합니다.
pub fn extract_facebook_alias(link: &str) -> Option<&str> {
    FACEBOOK_LINK_PATTERN
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "timezone must be a string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_alias() {
        assert_eq!(extract_facebook_alias("http://www.facebook.com/ada.l"), Some("ada.l"));
        assert_eq!(
            extract_facebook_alias("http://www.facebook.com/profile.php?id=42"),
            Some("profile.php?id=42")
        );
    }

    #[test]
    fn test_extract_alias_stops_at_line_break() {
        assert_eq!(extract_facebook_alias("http://www.facebook.com/ada.l\n"), Some("ada.l"));
    }

    #[test]
    fn test_extract_alias_rejects_other_prefixes() {
        assert_eq!(extract_facebook_alias("https://m.facebook.com/ada.l"), None);
        assert_eq!(extract_facebook_alias("https://www.facebook.com/ada.l"), None);
        assert_eq!(extract_facebook_alias("http://www.facebook.com/"), None);
        assert_eq!(extract_facebook_alias("http://wwwxfacebook.com/ada.l"), None);
    }

    #[test]
    fn test_timezone_accepts_number_and_string() {
        let numeric: FacebookProfile = serde_json::from_value(json!({ "id": "1", "timezone": -5.5 })).unwrap();
        assert_eq!(numeric.timezone.as_deref(), Some("-5.5"));

        let text: FacebookProfile = serde_json::from_value(json!({ "id": "1", "timezone": "0" })).unwrap();
        assert_eq!(text.timezone.as_deref(), Some("0"));

        let missing: FacebookProfile = serde_json::from_value(json!({ "id": "1" })).unwrap();
        assert_eq!(missing.timezone, None);
    }

    #[test]
    fn test_timezone_rejects_objects() {
        let result = serde_json::from_value::<FacebookProfile>(json!({ "timezone": { "offset": 1 } }));
        assert!(result.is_err());
    }

    #[test]
    fn test_alias_tristate() {
        let mut profile = FacebookProfile::default();
        assert_eq!(profile.alias(), None);

        profile.link = Some("https://m.facebook.com/ada.l".to_string());
        assert_eq!(profile.alias(), Some(None));

        profile.link = Some("http://www.facebook.com/ada.l".to_string());
        assert_eq!(profile.alias(), Some(Some("ada.l")));
    }
}
