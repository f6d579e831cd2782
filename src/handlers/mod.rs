//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 신원 조회/생성                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore 구현                  ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 요청 검증과 응답 변환만 담당하고, 에러는 [`AppError`](crate::errors::AppError)의
//! `ResponseError` 구현으로 HTTP 응답이 됩니다.

pub mod auth;
