//! # Domain Models Module
//!
//! 도메인 모델과 값 객체를 정의하는 모듈입니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): MongoDB 문서와 직접 매핑되며 고유 ID를 가짐 (`User`)
//! - **Models** (`./`): 엔티티에 포함되거나 외부에서 전달되는 값 객체
//!   (`ProviderIdentity`, `ProviderProfile`, `Credential`)

pub mod oauth;

pub use oauth::*;
