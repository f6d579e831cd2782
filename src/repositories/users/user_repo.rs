//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! 신원 서비스는 [`UserStore`] 트레이트에만 의존하며,
//! 실제 저장소(MongoDB, 메모리)는 애플리케이션 시작 시 주입됩니다.
//!
//! ## 특징
//!
//! - **최소 계약**: `find_by_identity`(findOne)와 `create`만 요구
//! - **에러 분류**: 조회 실패는 `LookupFailed`, 쓰기 실패는 `PersistenceWriteFailed`
//! - **유니크 제약**: 프로바이더별 `external_id` 부분 유니크 인덱스, 중복 시 `ConflictError`

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    config::ProviderTag,
    db::Database,
    domain::entities::users::user::User,
};
use crate::errors::{AppError, AppResult};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// 신원 서비스가 요구하는 영속성 협력자 계약
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 프로바이더 신원이 `external_id`와 일치하는 사용자를 조회합니다.
    ///
    /// 저장소 오류는 `AppError::LookupFailed`로 반환합니다.
    async fn find_by_identity(
        &self,
        provider: ProviderTag,
        external_id: &str,
    ) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 식별자가 부여된 레코드를 반환합니다.
    ///
    /// * `AppError::ConflictError` - 같은 (provider, external_id)가 이미 존재
    /// * `AppError::PersistenceWriteFailed` - 그 밖의 쓰기 실패
    async fn create(&self, user: User) -> AppResult<User>;
}

/// MongoDB `users` 컬렉션 기반 리포지토리
///
/// ## 인덱스
/// - `facebook.external_id` (unique, partial)
/// - `instagram.external_id` (unique, partial)
/// - `created_at` (desc)
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    /// 프로바이더별 유니크 인덱스를 생성합니다.
    ///
    /// 해당 프로바이더 신원이 있는 문서에만 적용되는 부분 인덱스이므로
    /// 다른 프로바이더로만 가입한 사용자끼리는 충돌하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let mut indexes: Vec<IndexModel> = ProviderTag::ALL
            .into_iter()
            .map(external_id_index)
            .collect();

        indexes.push(
            IndexModel::builder()
                .keys(doc! { "created_at": -1 })
                .options(IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build())
                .build(),
        );

        self.collection()
            .create_indexes(indexes)
            .await
            .map_err(|e| AppError::PersistenceWriteFailed(format!("인덱스 생성 실패: {}", e)))?;

        log::info!("✅ users 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_identity(
        &self,
        provider: ProviderTag,
        external_id: &str,
    ) -> AppResult<Option<User>> {
        self.collection()
            .find_one(identity_filter(provider, external_id))
            .await
            .map_err(|e| AppError::LookupFailed(e.to_string()))
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 연결된 소셜 계정입니다".to_string())
                } else {
                    AppError::PersistenceWriteFailed(e.to_string())
                }
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::PersistenceWriteFailed("ObjectId가 아닌 식별자가 반환되었습니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }
}

/// `{ "<provider>.external_id": external_id }` 조회 조건
pub fn identity_filter(provider: ProviderTag, external_id: &str) -> Document {
    let mut filter = Document::new();
    filter.insert(provider.external_id_path(), external_id);
    filter
}

fn external_id_index(provider: ProviderTag) -> IndexModel {
    let path = provider.external_id_path();

    let mut keys = Document::new();
    keys.insert(path.clone(), 1);

    let mut partial = Document::new();
    partial.insert(path, doc! { "$exists": true });

    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder()
            .unique(true)
            .name(format!("{}_external_id_unique", provider.as_str()))
            .partial_filter_expression(partial)
            .build())
        .build()
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        &*error.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}
