use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};

/// OAuth 콜백에서 전달되는 자격 증명 묶음
///
/// 토큰 값은 저장만 할 뿐 해석하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn new(access_token: impl Into<String>, expires: Option<DateTime<Utc>>) -> Self {
        Self {
            access_token: access_token.into(),
            expires,
        }
    }

    /// 만료 시각을 저장용 BSON 타임스탬프로 변환
    pub fn expires_at(&self) -> Option<bson::DateTime> {
        self.expires
            .map(|expires| bson::DateTime::from_millis(expires.timestamp_millis()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_expires_at_conversion() {
        let expires = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let credential = Credential::new("tok123", Some(expires));

        assert_eq!(
            credential.expires_at().map(|dt| dt.timestamp_millis()),
            Some(expires.timestamp_millis())
        );
        assert_eq!(Credential::new("tok123", None).expires_at(), None);
    }
}
