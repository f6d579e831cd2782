//! User Entity Implementation
//!
//! 소셜 로그인 신원을 보유하는 사용자 엔티티입니다.
//! 각 프로바이더의 신원은 자신의 필드에 하위 문서로 저장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::ProviderTag;
use crate::domain::models::oauth::ProviderIdentity;

/// 사용자 엔티티
///
/// `id`가 `None`이면 아직 저장되지 않은 초안 상태입니다.
/// 저장소의 `create`가 식별자를 부여합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Facebook 신원 (`facebook.external_id`로 조회)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<ProviderIdentity>,
    /// Instagram 신원 (`instagram.external_id`로 조회)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<ProviderIdentity>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 정확히 하나의 프로바이더 신원을 가진 새 사용자 초안 생성
    pub fn with_identity(provider: ProviderTag, identity: ProviderIdentity) -> Self {
        let now = DateTime::now();

        let mut user = Self {
            id: None,
            facebook: None,
            instagram: None,
            created_at: now,
            updated_at: now,
        };
        *user.identity_slot(provider) = Some(identity);
        user
    }

    /// 프로바이더별 신원 조회
    pub fn identity(&self, provider: ProviderTag) -> Option<&ProviderIdentity> {
        match provider {
            ProviderTag::Facebook => self.facebook.as_ref(),
            ProviderTag::Instagram => self.instagram.as_ref(),
        }
    }

    fn identity_slot(&mut self, provider: ProviderTag) -> &mut Option<ProviderIdentity> {
        match provider {
            ProviderTag::Facebook => &mut self.facebook,
            ProviderTag::Instagram => &mut self.instagram,
        }
    }

    /// 주어진 프로바이더 신원이 연결되어 있는지 확인
    pub fn is_linked_to(&self, provider: ProviderTag, external_id: &str) -> bool {
        self.identity(provider)
            .is_some_and(|identity| identity.external_id == external_id)
    }

    /// 연결된 프로바이더 목록
    pub fn linked_providers(&self) -> Vec<ProviderTag> {
        ProviderTag::ALL
            .into_iter()
            .filter(|provider| self.identity(*provider).is_some())
            .collect()
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
