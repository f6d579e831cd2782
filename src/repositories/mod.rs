//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 전역 레지스트리를 거치지 않고 생성자로 주입됩니다.
//! `main`에서 설정(`STORAGE_BACKEND`)에 따라 하나를 골라 `Arc<dyn UserStore>`로 넘깁니다.

pub mod users;
