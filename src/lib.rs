//! 소셜 계정 연결 서비스 백엔드
//!
//! Facebook, Instagram 소셜 로그인 결과를 로컬 사용자 레코드와 연결합니다.
//! 같은 프로바이더 계정으로 다시 로그인하면 기존 사용자를 그대로 반환하고,
//! 처음 보는 계정이면 해당 신원만 가진 새 사용자를 생성합니다.
//!
//! # Features
//!
//! - **find-or-create**: 프로바이더별 `external_id` 기준 사용자 조회/생성
//! - **프로필 매핑**: Facebook Graph, Instagram 프로필을 정규화된 신원으로 변환
//! - **유니크 보장**: 프로바이더별 부분 유니크 인덱스와 충돌 시 재조회
//! - **MongoDB**: 사용자 데이터 영구 저장 (메모리 저장소로 대체 가능)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 신원 조회/연결
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserStore     │ ← 데이터 액세스 (트레이트)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB/Memory  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use social_link_backend::config::AliasPolicy;
//! use social_link_backend::domain::{Credential, ProviderProfile};
//! use social_link_backend::repositories::users::InMemoryUserRepository;
//! use social_link_backend::services::identity::IdentityResolutionService;
//!
//! let service = IdentityResolutionService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     AliasPolicy::Strict,
//! );
//!
//! let user = service.resolve_profile(&profile, &Credential::new("tok123", None)).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
