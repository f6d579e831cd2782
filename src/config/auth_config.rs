//! # Authentication Configuration Module
//!
//! 소셜 로그인 프로바이더와 신원 매핑 정책 관련 설정을 관리하는 모듈입니다.
//!
//! ## 지원하는 프로바이더
//!
//! 1. **Facebook**: Graph API 프로필 (`id`, `name`, `link`, ...)
//! 2. **Instagram**: 사용자 프로필 (`id`, `username`, `full_name`, ...)
//!
//! ## 환경 변수
//!
//! ```bash
//! # 프로필 링크가 별칭 패턴과 맞지 않을 때의 처리 방식
//! export FACEBOOK_ALIAS_POLICY="strict"   # strict | lenient
//! ```

use std::env;

/// 신원 매핑 정책 설정
pub struct IdentityConfig;

impl IdentityConfig {
    /// Facebook 별칭 추출 실패 처리 정책
    ///
    /// 설정되지 않았거나 알 수 없는 값이면 `Strict`를 사용합니다.
    pub fn alias_policy() -> AliasPolicy {
        Self::alias_policy_from(env::var("FACEBOOK_ALIAS_POLICY").ok().as_deref())
    }

    /// `FACEBOOK_ALIAS_POLICY` 값(없으면 `None`)을 정책으로 변환합니다.
    pub fn alias_policy_from(value: Option<&str>) -> AliasPolicy {
        match value {
            Some(value) => AliasPolicy::from_str(value).unwrap_or_else(|e| {
                log::warn!("{}. strict 정책을 사용합니다", e);
                AliasPolicy::Strict
            }),
            None => AliasPolicy::Strict,
        }
    }
}

/// 프로필 링크에서 별칭을 추출하지 못했을 때의 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AliasPolicy {
    /// 추출 실패를 `AliasExtractionFailed`로 처리하고 레코드를 만들지 않습니다.
    #[default]
    Strict,
    /// 별칭 없이(`None`) 레코드를 생성합니다.
    Lenient,
}

impl AliasPolicy {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(AliasPolicy::Strict),
            "lenient" => Ok(AliasPolicy::Lenient),
            _ => Err(format!("Unsupported alias policy: {}", s)),
        }
    }
}

/// 소셜 로그인 프로바이더
///
/// 사용자 문서에서 각 프로바이더의 신원은 자신의 필드(`facebook`, `instagram`)에
/// 저장되며, `external_id`는 프로바이더 네임스페이스 안에서 유일해야 합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderTag {
    Facebook,

    Instagram,
}

impl ProviderTag {
    pub const ALL: [ProviderTag; 2] = [ProviderTag::Facebook, ProviderTag::Instagram];

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "facebook" => Ok(ProviderTag::Facebook),
            "instagram" => Ok(ProviderTag::Instagram),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderTag::Facebook => "facebook",
            ProviderTag::Instagram => "instagram",
        }
    }

    /// 사용자 문서에서 이 프로바이더의 신원을 담는 필드 이름
    pub fn identity_field(&self) -> &'static str {
        self.as_str()
    }

    /// 조회 및 인덱스에 사용하는 external_id 경로 (예: `facebook.external_id`)
    pub fn external_id_path(&self) -> String {
        format!("{}.external_id", self.identity_field())
    }
}

impl std::fmt::Display for ProviderTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_tag_from_string() {
        assert_eq!(ProviderTag::from_str("facebook").unwrap(), ProviderTag::Facebook);
        assert_eq!(ProviderTag::from_str("instagram").unwrap(), ProviderTag::Instagram);

        // 대소문자 무관 테스트
        assert_eq!(ProviderTag::from_str("FaceBook").unwrap(), ProviderTag::Facebook);

        assert!(ProviderTag::from_str("google").is_err());
        assert!(ProviderTag::from_str("").is_err());
    }

    #[test]
    fn test_external_id_path() {
        assert_eq!(ProviderTag::Facebook.external_id_path(), "facebook.external_id");
        assert_eq!(ProviderTag::Instagram.external_id_path(), "instagram.external_id");
    }

    #[test]
    fn test_provider_tag_serialization() {
        let json = serde_json::to_string(&ProviderTag::Instagram).unwrap();
        assert_eq!(json, "\"instagram\"");

        let parsed: ProviderTag = serde_json::from_str("\"facebook\"").unwrap();
        assert_eq!(parsed, ProviderTag::Facebook);
    }

    #[test]
    fn test_alias_policy_from_string() {
        assert_eq!(AliasPolicy::from_str("strict").unwrap(), AliasPolicy::Strict);
        assert_eq!(AliasPolicy::from_str(" Lenient ").unwrap(), AliasPolicy::Lenient);
        assert!(AliasPolicy::from_str("maybe").is_err());
        assert_eq!(AliasPolicy::default(), AliasPolicy::Strict);
    }

    #[test]
    fn test_alias_policy_config_falls_back_to_strict() {
        assert_eq!(IdentityConfig::alias_policy_from(None), AliasPolicy::Strict);
        assert_eq!(IdentityConfig::alias_policy_from(Some("maybe")), AliasPolicy::Strict);
        assert_eq!(IdentityConfig::alias_policy_from(Some("")), AliasPolicy::Strict);
        assert_eq!(IdentityConfig::alias_policy_from(Some("lenient")), AliasPolicy::Lenient);
    }
}
