use serde::{Deserialize, Serialize};

/// Instagram 사용자 프로필
///
/// `id`만 보장되며 나머지는 프로바이더 응답에 따라 비어 있을 수 있습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstagramProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}
