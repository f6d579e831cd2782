//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | `users::request` | OAuth 콜백 요청 본문 매핑 및 검증 |
//! | `users::response` | 연결된 사용자 응답 (민감 정보 제외) |

pub mod users;

pub use users::*;
