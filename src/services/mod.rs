//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 전역 레지스트리 없이 생성자로 저장소를 주입받으며,
//! `main`에서 한 번 생성해 `web::Data`로 핸들러와 공유합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::AliasPolicy;
//! use crate::repositories::users::InMemoryUserRepository;
//! use crate::services::identity::IdentityResolutionService;
//!
//! let store = Arc::new(InMemoryUserRepository::new());
//! let service = IdentityResolutionService::new(store, AliasPolicy::Strict);
//! ```

pub mod identity;
