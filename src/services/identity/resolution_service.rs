//! # 신원 조회(Identity Resolution) 서비스
//!
//! 프로바이더가 부여한 `external_id`로 이미 연결된 사용자를 찾고,
//! 없으면 [`IdentityAttachmentService`]로 새 사용자를 만드는
//! find-or-create 흐름을 구현합니다.
//!
//! ## 상태 전이 (신원 단위)
//!
//! ```text
//! Unknown ──(create)──► Linked
//! ```
//!
//! `Linked`는 종료 상태입니다. 재로그인 시 토큰이나 프로필을 갱신하지 않으며,
//! 저장된 레코드를 그대로 반환합니다.
//!
//! ## 동시성
//!
//! 조회와 생성은 서로 다른 두 번의 저장소 호출이며 트랜잭션으로 묶이지 않습니다.
//! 같은 신규 `external_id`로 두 요청이 동시에 들어오면 둘 다 miss를 볼 수 있습니다.
//! 저장소의 유니크 인덱스가 두 번째 생성을 `ConflictError`로 거절하면,
//! 이 서비스는 한 번 더 조회해서 먼저 생성된 레코드를 반환합니다.
//! 재조회도 miss면 충돌을 `PersistenceWriteFailed`로 돌려줍니다.

use std::sync::Arc;
use crate::{
    config::{AliasPolicy, ProviderTag},
    domain::{
        entities::users::user::User,
        models::oauth::{Credential, ProviderProfile},
    },
    repositories::users::UserStore,
};
use crate::errors::{AppError, AppResult};
use super::attachment_service::IdentityAttachmentService;

pub struct IdentityResolutionService {
    user_store: Arc<dyn UserStore>,
    attachment: IdentityAttachmentService,
}

impl IdentityResolutionService {
    /// 같은 저장소를 공유하는 연결 서비스와 함께 생성합니다.
    pub fn new(user_store: Arc<dyn UserStore>, alias_policy: AliasPolicy) -> Self {
        let attachment = IdentityAttachmentService::new(user_store.clone(), alias_policy);
        Self {
            user_store,
            attachment,
        }
    }

    /// 연결된 사용자를 반환하거나, 없으면 새로 생성합니다.
    ///
    /// # 처리 단계
    ///
    /// 1. `find_by_identity(provider, external_id)` - 실패하면 그대로 반환 (생성 시도 없음)
    /// 2. hit - 저장된 레코드를 변경 없이 반환
    /// 3. miss - `external_id`와 프로필 id가 같은지 확인 후 `attach`
    ///
    /// # Errors
    ///
    /// * `AppError::LookupFailed` - 조회 실패
    /// * `AppError::MalformedProfile` - 프로필 id 불일치 또는 필수 필드 누락
    /// * `AppError::AliasExtractionFailed` - 별칭 추출 실패
    /// * `AppError::PersistenceWriteFailed` - 저장 실패
    pub async fn resolve_or_create(
        &self,
        provider: ProviderTag,
        external_id: &str,
        profile: &ProviderProfile,
        credential: &Credential,
    ) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        if let Some(existing) = self.user_store.find_by_identity(provider, external_id).await? {
            log::info!(
                "{} 사용자 로그인: external_id={}, id={}",
                provider,
                external_id,
                existing.id_string().unwrap_or_default()
            );
            return Ok(existing);
        }

        if profile.external_id() != Some(external_id) {
            return Err(AppError::MalformedProfile(format!(
                "요청한 external_id({})와 프로필 id가 다릅니다",
                external_id
            )));
        }

        let result = match self.attachment.attach(provider, profile, credential).await {
            Err(AppError::ConflictError(msg)) => {
                log::warn!(
                    "{} 신원 동시 생성 감지, 재조회합니다: external_id={}",
                    provider,
                    external_id
                );
                self.user_store
                    .find_by_identity(provider, external_id)
                    .await?
                    .ok_or(AppError::PersistenceWriteFailed(msg))
            }
            other => other,
        };

        log::debug!("신원 조회/생성 소요 시간: {:?}", start_time.elapsed());
        result
    }

    /// 프로필에서 프로바이더와 `external_id`를 꺼내 [`resolve_or_create`](Self::resolve_or_create)를 호출합니다.
    pub async fn resolve_profile(
        &self,
        profile: &ProviderProfile,
        credential: &Credential,
    ) -> AppResult<User> {
        let external_id = profile
            .external_id()
            .ok_or_else(|| {
                AppError::MalformedProfile(format!("{} 프로필에 id가 없습니다", profile.provider()))
            })?
            .to_string();

        self.resolve_or_create(profile.provider(), &external_id, profile, credential)
            .await
    }
}
