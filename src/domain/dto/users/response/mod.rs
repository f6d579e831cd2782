//! # 사용자 응답 DTO 모듈
//!
//! 엔티티를 클라이언트에 노출 가능한 형태로 변환합니다.
//! 액세스 토큰 등 민감 정보는 변환 과정에서 제외됩니다.

pub mod user_response;

pub use user_response::{IdentityResponse, LinkedUserResponse};
