use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::config::ProviderTag;
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::{DisplayName, ProviderIdentity};

/// 연결된 신원의 공개 정보
///
/// 액세스 토큰과 만료 시각은 응답에 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub provider: ProviderTag,
    pub external_id: String,
    pub display_name: DisplayName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub verified: bool,
}

impl IdentityResponse {
    fn from_identity(provider: ProviderTag, identity: &ProviderIdentity) -> Self {
        Self {
            provider,
            external_id: identity.external_id.clone(),
            display_name: identity.display_name.clone(),
            alias: identity.alias.clone(),
            email: identity.email.clone(),
            picture: identity.picture.clone(),
            verified: identity.verified,
        }
    }
}

/// 소셜 로그인 콜백 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedUserResponse {
    pub id: String,
    pub linked_providers: Vec<ProviderTag>,
    pub identities: Vec<IdentityResponse>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for LinkedUserResponse {
    fn from(user: User) -> Self {
        let linked_providers = user.linked_providers();
        let identities = linked_providers
            .iter()
            .filter_map(|provider| {
                user.identity(*provider)
                    .map(|identity| IdentityResponse::from_identity(*provider, identity))
            })
            .collect();

        Self {
            id: user.id_string().unwrap_or_default(),
            linked_providers,
            identities,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
