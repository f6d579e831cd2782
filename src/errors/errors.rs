//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 소셜 로그인 신원 연결 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 신원 연결 과정의 에러는 내부적으로는 종류별로 구분되지만,
//! 콜백 응답에서는 동일한 인증 실패 응답으로 노출됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn lookup(store: &dyn UserStore, id: &str) -> Result<Option<User>, AppError> {
//!     store.find_by_identity(ProviderTag::Facebook, id).await
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 신원 조회/생성 과정에서 발생할 수 있는 모든 에러를 포괄하는 열거형입니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 저장소 조회 실패. 재시도하지 않고 생성 단계로 넘어가지도 않습니다.
    #[error("Lookup failed: {0}")]
    LookupFailed(String),

    /// 저장소 쓰기 실패
    #[error("Persistence write failed: {0}")]
    PersistenceWriteFailed(String),

    /// 프로바이더 프로필의 필수 필드 누락 또는 파싱 실패
    #[error("Malformed profile: {0}")]
    MalformedProfile(String),

    /// 프로필 링크에서 별칭(alias) 추출 실패
    #[error("Alias extraction failed: {0}")]
    AliasExtractionFailed(String),

    /// 동일한 (provider, external_id) 조합이 이미 저장됨
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 신원 연결 흐름에서 발생한 에러인지 확인합니다.
    ///
    /// 요청 형식 자체가 잘못된 경우(`ValidationError`)를 제외한 모든 에러는
    /// 로그인 실패로 취급됩니다.
    pub fn is_authentication_failure(&self) -> bool {
        !matches!(self, AppError::ValidationError(_))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        if self.is_authentication_failure() {
            StatusCode::UNAUTHORIZED
        } else {
            StatusCode::BAD_REQUEST
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 인증 실패는 종류와 관계없이 동일한 본문을 반환합니다.
    /// 상세 원인은 호출 측에서 로그로만 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(msg) => serde_json::json!({
                "error": "invalid_request",
                "message": msg,
            }),
            _ => serde_json::json!({
                "error": "authentication_failed",
                "message": "소셜 로그인에 실패했습니다",
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
