//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (User)
//! ├── models/       ← 신원, 프로필, 자격 증명 값 객체
//! └── dto/          ← 콜백 요청/응답
//! ```

pub mod users;
