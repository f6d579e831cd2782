//! # Domain Module
//!
//! 엔티티, 값 객체, 데이터 전송 객체를 묶는 도메인 계층입니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::User;
pub use dto::{IdentityResponse, LinkedUserResponse, SocialCallbackRequest};
pub use models::oauth::{
    Credential, DisplayName, FacebookProfile, InstagramProfile, ProviderIdentity, ProviderProfile,
};
