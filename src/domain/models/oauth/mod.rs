//! # OAuth Domain Models Module
//!
//! 소셜 로그인 콜백에서 전달되는 프로필/자격 증명과,
//! 사용자 문서에 저장되는 정규화된 신원 모델을 정의합니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! oauth/
//! ├── credential.rs          ← 액세스 토큰 + 만료 시각
//! ├── facebook_profile.rs    ← Facebook Graph API 프로필, 별칭 추출
//! ├── instagram_profile.rs   ← Instagram 프로필
//! ├── provider_profile.rs    ← 프로바이더별 프로필 태그드 유니온
//! └── provider_identity.rs   ← 저장용 신원 정보와 필드 매핑
//! ```
//!
//! 새 프로바이더를 추가할 때는 `ProviderTag`와 `ProviderProfile`에 변형을 추가하고
//! `ProviderIdentity::from_profile`에 매핑을 작성합니다.

pub mod credential;
pub mod facebook_profile;
pub mod instagram_profile;
pub mod provider_profile;
pub mod provider_identity;

pub use credential::Credential;
pub use facebook_profile::{extract_facebook_alias, FacebookProfile};
pub use instagram_profile::InstagramProfile;
pub use provider_profile::ProviderProfile;
pub use provider_identity::{DisplayName, ProviderIdentity};
