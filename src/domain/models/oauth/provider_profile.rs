use serde::{Deserialize, Serialize};
use crate::config::ProviderTag;
use crate::errors::errors::AppError;
use super::facebook_profile::FacebookProfile;
use super::instagram_profile::InstagramProfile;

/// 프로바이더별 원본 프로필 페이로드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum ProviderProfile {
    Facebook(FacebookProfile),
    Instagram(InstagramProfile),
}

impl ProviderProfile {
    /// 프로바이더 태그에 맞는 스키마로 JSON 프로필을 해석합니다.
    ///
    /// 스키마와 맞지 않으면 `MalformedProfile`을 반환합니다.
    pub fn from_value(provider: ProviderTag, value: serde_json::Value) -> Result<Self, AppError> {
        let parsed = match provider {
            ProviderTag::Facebook => serde_json::from_value(value).map(ProviderProfile::Facebook),
            ProviderTag::Instagram => serde_json::from_value(value).map(ProviderProfile::Instagram),
        };

        parsed.map_err(|e| {
            AppError::MalformedProfile(format!("{} 프로필 파싱 실패: {}", provider, e))
        })
    }

    pub fn provider(&self) -> ProviderTag {
        match self {
            ProviderProfile::Facebook(_) => ProviderTag::Facebook,
            ProviderProfile::Instagram(_) => ProviderTag::Instagram,
        }
    }

    /// 프로바이더가 부여한 사용자 ID
    ///
    /// 값은 그대로 반환하며, 공백뿐인 ID는 `None`으로 취급합니다.
    pub fn external_id(&self) -> Option<&str> {
        let id = match self {
            ProviderProfile::Facebook(profile) => profile.id.as_deref(),
            ProviderProfile::Instagram(profile) => profile.id.as_deref(),
        };

        id.filter(|id| !id.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_by_provider() {
        let profile = ProviderProfile::from_value(
            ProviderTag::Instagram,
            json!({ "id": "7", "username": "hipster" }),
        )
        .unwrap();

        assert_eq!(profile.provider(), ProviderTag::Instagram);
        assert_eq!(profile.external_id(), Some("7"));
    }

    #[test]
    fn test_from_value_rejects_wrong_shape() {
        let result = ProviderProfile::from_value(ProviderTag::Facebook, json!("not an object"));
        assert!(matches!(result, Err(AppError::MalformedProfile(_))));

        let result = ProviderProfile::from_value(ProviderTag::Facebook, json!({ "id": 42 }));
        assert!(matches!(result, Err(AppError::MalformedProfile(_))));
    }

    #[test]
    fn test_blank_external_id_is_missing() {
        let profile = ProviderProfile::Facebook(FacebookProfile {
            id: Some("  ".to_string()),
            ..Default::default()
        });
        assert_eq!(profile.external_id(), None);
    }

    #[test]
    fn test_external_id_is_kept_verbatim() {
        let profile = ProviderProfile::Facebook(FacebookProfile {
            id: Some(" 42 ".to_string()),
            ..Default::default()
        });
        assert_eq!(profile.external_id(), Some(" 42 "));
    }
}
