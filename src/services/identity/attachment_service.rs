//! # 신원 연결(Identity Attachment) 서비스
//!
//! 프로바이더 프로필과 자격 증명으로 정규화된 신원을 만들고,
//! 그 신원 하나만 가진 새 사용자 레코드를 저장합니다.
//!
//! ## 처리 과정
//!
//! ```text
//! (provider, profile, credential)
//!            │
//!            ▼
//!   프로바이더 태그 일치 확인 ──✗──► MalformedProfile
//!            │
//!            ▼
//!   ProviderIdentity::from_profile ──✗──► MalformedProfile / AliasExtractionFailed
//!            │
//!            ▼
//!   User::with_identity → UserStore::create ──✗──► PersistenceWriteFailed / ConflictError
//!            │
//!            ▼
//!       저장된 User
//! ```
//!
//! 매핑 단계에서 실패하면 저장소에는 아무것도 쓰지 않습니다.

use std::sync::Arc;
use crate::{
    config::{AliasPolicy, ProviderTag},
    domain::{
        entities::users::user::User,
        models::oauth::{Credential, ProviderIdentity, ProviderProfile},
    },
    repositories::users::UserStore,
};
use crate::errors::{AppError, AppResult};

/// 새 사용자 레코드에 프로바이더 신원을 붙여 저장하는 서비스
pub struct IdentityAttachmentService {
    /// 영속성 협력자 (생성자로 주입)
    user_store: Arc<dyn UserStore>,
    /// Facebook 링크 별칭 추출 실패 정책
    alias_policy: AliasPolicy,
}

impl IdentityAttachmentService {
    pub fn new(user_store: Arc<dyn UserStore>, alias_policy: AliasPolicy) -> Self {
        Self {
            user_store,
            alias_policy,
        }
    }

    /// 프로필로 신원을 만들고 새 사용자와 함께 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장소가 식별자를 부여한 사용자
    /// * `Err(AppError::MalformedProfile)` - 태그 불일치, 필수 필드 누락
    /// * `Err(AppError::AliasExtractionFailed)` - 별칭 추출 실패 (`Strict` 정책)
    /// * `Err(AppError::PersistenceWriteFailed)` - 저장 실패
    /// * `Err(AppError::ConflictError)` - 같은 신원이 이미 저장됨
    pub async fn attach(
        &self,
        provider: ProviderTag,
        profile: &ProviderProfile,
        credential: &Credential,
    ) -> AppResult<User> {
        if profile.provider() != provider {
            return Err(AppError::MalformedProfile(format!(
                "{} 프로필이 {} 프로바이더로 전달되었습니다",
                profile.provider(),
                provider
            )));
        }

        let identity = ProviderIdentity::from_profile(profile, credential, self.alias_policy)?;
        let external_id = identity.external_id.clone();

        let created = self.user_store
            .create(User::with_identity(provider, identity))
            .await?;

        log::info!(
            "새 {} 사용자 생성: external_id={}, id={}",
            provider,
            external_id,
            created.id_string().unwrap_or_default()
        );

        Ok(created)
    }
}
