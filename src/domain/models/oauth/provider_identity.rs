//! # 프로바이더 신원 모델
//!
//! 소셜 로그인 프로필을 사용자 문서에 저장되는 정규화된 신원 정보로 변환합니다.
//!
//! ```text
//! ProviderProfile + Credential
//!           │
//!           ▼
//!   필수 필드 확인 (id, access_token)
//!           │
//!           ▼
//!   프로바이더별 필드 매핑 ──► ProviderIdentity
//! ```

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::config::AliasPolicy;
use crate::errors::errors::AppError;
use super::credential::Credential;
use super::facebook_profile::FacebookProfile;
use super::instagram_profile::InstagramProfile;
use super::provider_profile::ProviderProfile;

/// 표시 이름 구성 요소
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// 사용자 레코드에 연결된 단일 프로바이더 신원
///
/// 사용자 레코드와 함께 한 번만 생성되며, 이후 로그인에서 갱신되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderIdentity {
    /// 프로바이더 네임스페이스 안에서 유일한 사용자 ID
    pub external_id: String,
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime>,
    #[serde(default)]
    pub display_name: DisplayName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default)]
    pub verified: bool,
    /// 프로바이더가 준 갱신 시각 문자열 (파싱하지 않고 그대로 저장)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ProviderIdentity {
    /// 프로필과 자격 증명으로 신원 정보를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MalformedProfile` - `id` 또는 액세스 토큰이 비어 있음
    /// * `AppError::AliasExtractionFailed` - `Strict` 정책에서 Facebook 링크가 패턴과 맞지 않음
    pub fn from_profile(
        profile: &ProviderProfile,
        credential: &Credential,
        alias_policy: AliasPolicy,
    ) -> Result<Self, AppError> {
        let external_id = profile
            .external_id()
            .ok_or_else(|| {
                AppError::MalformedProfile(format!("{} 프로필에 id가 없습니다", profile.provider()))
            })?
            .to_string();

        if credential.access_token.trim().is_empty() {
            return Err(AppError::MalformedProfile("액세스 토큰이 비어 있습니다".to_string()));
        }

        let identity = Self::bare(external_id, credential);

        match profile {
            ProviderProfile::Facebook(fb) => identity.with_facebook(fb, alias_policy),
            ProviderProfile::Instagram(ig) => Ok(identity.with_instagram(ig)),
        }
    }

    fn bare(external_id: String, credential: &Credential) -> Self {
        Self {
            external_id,
            access_token: credential.access_token.clone(),
            expires_at: credential.expires_at(),
            display_name: DisplayName::default(),
            alias: None,
            gender: None,
            email: None,
            timezone: None,
            locale: None,
            phone: None,
            picture: None,
            verified: false,
            updated_at: None,
        }
    }

    fn with_facebook(mut self, fb: &FacebookProfile, alias_policy: AliasPolicy) -> Result<Self, AppError> {
        self.alias = match fb.alias() {
            None => None,
            Some(Some(alias)) => Some(alias.to_string()),
            Some(None) => match alias_policy {
                AliasPolicy::Strict => {
                    return Err(AppError::AliasExtractionFailed(format!(
                        "프로필 링크에서 별칭을 추출할 수 없습니다: {}",
                        fb.link.as_deref().unwrap_or_default()
                    )));
                }
                AliasPolicy::Lenient => {
                    log::warn!("별칭 추출 실패, 별칭 없이 진행합니다 (facebook id: {})", self.external_id);
                    None
                }
            },
        };

        self.display_name = DisplayName {
            full: fb.name.clone(),
            first: fb.first_name.clone(),
            last: fb.last_name.clone(),
        };
        self.gender = fb.gender.clone();
        self.email = fb.email.clone();
        self.timezone = fb.timezone.clone();
        self.locale = fb.locale.clone();
        self.phone = fb.phone.clone();
        self.verified = fb.verified.unwrap_or(false);
        self.updated_at = fb.updated_time.clone();

        Ok(self)
    }

    fn with_instagram(mut self, ig: &InstagramProfile) -> Self {
        self.display_name = DisplayName {
            full: ig.full_name.clone(),
            first: None,
            last: None,
        };
        self.alias = ig.username.clone();
        self.picture = ig.profile_picture.clone();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ada_profile() -> FacebookProfile {
        FacebookProfile {
            id: Some("42".to_string()),
            name: Some("Ada Lovelace".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            link: Some("http://www.facebook.com/ada.l".to_string()),
            gender: Some("female".to_string()),
            email: Some("a@example.com".to_string()),
            timezone: Some("0".to_string()),
            locale: Some("en_US".to_string()),
            verified: Some(true),
            updated_time: Some("2024-01-01T00:00:00Z".to_string()),
            phone: None,
        }
    }

    #[test]
    fn test_facebook_field_mapping() {
        let expires = Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap();
        let credential = Credential::new("tok123", Some(expires));
        let profile = ProviderProfile::Facebook(ada_profile());

        let identity = ProviderIdentity::from_profile(&profile, &credential, AliasPolicy::Strict).unwrap();

        assert_eq!(identity.external_id, "42");
        assert_eq!(identity.access_token, "tok123");
        assert_eq!(
            identity.expires_at.map(|dt| dt.timestamp_millis()),
            Some(expires.timestamp_millis())
        );
        assert_eq!(
            identity.display_name,
            DisplayName {
                full: Some("Ada Lovelace".to_string()),
                first: Some("Ada".to_string()),
                last: Some("Lovelace".to_string()),
            }
        );
        assert_eq!(identity.alias.as_deref(), Some("ada.l"));
        assert_eq!(identity.gender.as_deref(), Some("female"));
        assert_eq!(identity.email.as_deref(), Some("a@example.com"));
        assert_eq!(identity.timezone.as_deref(), Some("0"));
        assert_eq!(identity.locale.as_deref(), Some("en_US"));
        assert!(identity.verified);
        assert_eq!(identity.updated_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_non_matching_link_fails_in_strict_mode() {
        let mut fb = ada_profile();
        fb.link = Some("https://m.facebook.com/ada.l".to_string());
        let profile = ProviderProfile::Facebook(fb);

        let result = ProviderIdentity::from_profile(&profile, &Credential::new("tok123", None), AliasPolicy::Strict);

        assert!(matches!(result, Err(AppError::AliasExtractionFailed(_))));
    }

    #[test]
    fn test_non_matching_link_is_dropped_in_lenient_mode() {
        let mut fb = ada_profile();
        fb.link = Some("https://m.facebook.com/ada.l".to_string());
        let profile = ProviderProfile::Facebook(fb);

        let identity = ProviderIdentity::from_profile(&profile, &Credential::new("tok123", None), AliasPolicy::Lenient)
            .unwrap();

        assert_eq!(identity.alias, None);
        assert_eq!(identity.external_id, "42");
    }

    #[test]
    fn test_absent_fields_map_to_none() {
        let profile = ProviderProfile::Facebook(FacebookProfile {
            id: Some("42".to_string()),
            ..Default::default()
        });

        let identity = ProviderIdentity::from_profile(&profile, &Credential::new("tok", None), AliasPolicy::Strict)
            .unwrap();

        assert_eq!(identity.alias, None);
        assert_eq!(identity.display_name, DisplayName::default());
        assert_eq!(identity.expires_at, None);
        assert!(!identity.verified);
    }

    #[test]
    fn test_missing_id_is_malformed() {
        let profile = ProviderProfile::Facebook(FacebookProfile::default());
        let result = ProviderIdentity::from_profile(&profile, &Credential::new("tok", None), AliasPolicy::Strict);

        assert!(matches!(result, Err(AppError::MalformedProfile(_))));
    }

    #[test]
    fn test_empty_access_token_is_malformed() {
        let profile = ProviderProfile::Facebook(ada_profile());
        let result = ProviderIdentity::from_profile(&profile, &Credential::new("  ", None), AliasPolicy::Strict);

        assert!(matches!(result, Err(AppError::MalformedProfile(_))));
    }

    #[test]
    fn test_instagram_field_mapping() {
        let profile = ProviderProfile::Instagram(InstagramProfile {
            id: Some("1574083".to_string()),
            username: Some("snoopdogg".to_string()),
            full_name: Some("Snoop Dogg".to_string()),
            profile_picture: Some("http://distillery.s3.amazonaws.com/profiles/profile_1574083_75sq.jpg".to_string()),
        });

        let identity = ProviderIdentity::from_profile(&profile, &Credential::new("ig-token", None), AliasPolicy::Strict)
            .unwrap();

        assert_eq!(identity.external_id, "1574083");
        assert_eq!(identity.alias.as_deref(), Some("snoopdogg"));
        assert_eq!(identity.display_name.full.as_deref(), Some("Snoop Dogg"));
        assert!(identity.picture.is_some());
        assert_eq!(identity.email, None);
    }
}
