//! 프로세스 메모리 기반 사용자 저장소
//!
//! `STORAGE_BACKEND=memory`로 MongoDB 없이 서비스를 띄우거나 테스트할 때 사용합니다.
//! MongoDB 구현과 같은 유니크 제약을 적용합니다.

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::config::ProviderTag;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};
use super::user_repo::UserStore;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_identity(
        &self,
        provider: ProviderTag,
        external_id: &str,
    ) -> AppResult<Option<User>> {
        let users = self.users
            .read()
            .map_err(|e| AppError::LookupFailed(format!("저장소 잠금 실패: {}", e)))?;

        Ok(users
            .iter()
            .find(|user| user.is_linked_to(provider, external_id))
            .cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users
            .write()
            .map_err(|e| AppError::PersistenceWriteFailed(format!("저장소 잠금 실패: {}", e)))?;

        for provider in user.linked_providers() {
            let Some(identity) = user.identity(provider) else { continue };
            if users.iter().any(|u| u.is_linked_to(provider, &identity.external_id)) {
                return Err(AppError::ConflictError("이미 연결된 소셜 계정입니다".to_string()));
            }
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }
}
