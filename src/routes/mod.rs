//! # Route Configuration
//!
//! 애플리케이션의 모든 HTTP 라우트를 등록합니다.
//!
//! ## Routes
//!
//! - `GET /health` - 헬스체크
//! - `POST /api/v1/auth/{provider}/callback` - 소셜 로그인 콜백 (`facebook`, `instagram`)

use crate::errors::errors::AppError;
use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(resolution_service))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 소셜 로그인 라우트를 설정합니다
///
/// JSON 본문 파싱 실패는 `AppError::ValidationError`(400)로 응답합니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/facebook/callback \
///   -H "Content-Type: application/json" \
///   -d '{"profile":{"id":"42","link":"http://www.facebook.com/ada.l"},"access_token":"tok123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into());

    cfg.service(
        web::scope("/api/v1/auth")
            .app_data(json_config)
            .service(handlers::auth::social_callback)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "social_link_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "providers": ["facebook", "instagram"]
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "providers": crate::config::ProviderTag::ALL
        }
    }))
}
