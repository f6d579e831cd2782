//! 인증 요청관련 DTO
//!
//! 소셜 로그인 콜백에서 전달되는 프로필과 자격 증명을 매핑합니다.
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;
use crate::domain::models::oauth::Credential;

/// 소셜 로그인 콜백 요청 본문
///
/// `profile`은 프로바이더마다 스키마가 달라 원본 JSON으로 받고,
/// 경로의 프로바이더 이름에 따라 서비스 계층에서 해석합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct SocialCallbackRequest {
    pub profile: serde_json::Value,

    #[validate(length(min = 1, message = "액세스 토큰이 필요합니다"))]
    pub access_token: String,

    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
}

impl SocialCallbackRequest {
    pub fn credential(&self) -> Credential {
        Credential::new(self.access_token.clone(), self.expires)
    }
}
