//! Social Login Callback Handlers
//!
//! OAuth 인증이 끝난 뒤 전달되는 프로바이더 프로필로 사용자를 찾거나 생성합니다.
//! 코드 교환과 프로필 조회는 이 서비스 앞단에서 끝난 상태로 들어옵니다.
//!
//! # Endpoints
//!
//! - `POST /api/v1/auth/facebook/callback`
//! - `POST /api/v1/auth/instagram/callback`
use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::config::ProviderTag;
use crate::domain::{LinkedUserResponse, ProviderProfile, SocialCallbackRequest};
use crate::errors::errors::AppError;
use crate::services::identity::IdentityResolutionService;

/// 소셜 로그인 콜백 처리 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/{provider}/callback`
///
/// # Request Body
/// ```json
/// {
///   "profile": { "id": "42", "name": "Ada Lovelace", "link": "http://www.facebook.com/ada.l" },
///   "access_token": "tok123",
///   "expires": "2030-01-01T00:00:00Z"
/// }
/// ```
///
/// # Responses
/// - `200` - 연결된 사용자 ([`LinkedUserResponse`])
/// - `400` - 알 수 없는 프로바이더, 잘못된 요청 본문
/// - `401` - 신원 조회/생성 실패 (원인과 관계없이 같은 본문)
#[post("/{provider}/callback")]
pub async fn social_callback(
    path: web::Path<String>,
    payload: web::Json<SocialCallbackRequest>,
    resolution_service: web::Data<IdentityResolutionService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let provider = ProviderTag::from_str(&path)
        .map_err(AppError::ValidationError)?;

    let payload = payload.into_inner();
    let credential = payload.credential();

    let resolved = match ProviderProfile::from_value(provider, payload.profile) {
        Ok(profile) => resolution_service.resolve_profile(&profile, &credential).await,
        Err(e) => Err(e),
    };

    let user = resolved.inspect_err(|e| log::warn!("{} 소셜 로그인 실패: {}", provider, e))?;

    log::info!("{} 소셜 로그인 성공: {}", provider, user.id_string().unwrap_or_default());

    Ok(HttpResponse::Ok().json(LinkedUserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use crate::config::AliasPolicy;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::routes::configure_all_routes;
    use super::*;

    fn resolution_service() -> web::Data<IdentityResolutionService> {
        let store = Arc::new(InMemoryUserRepository::new());
        web::Data::new(IdentityResolutionService::new(store, AliasPolicy::Strict))
    }

    fn facebook_body(link: &str) -> Value {
        json!({
            "profile": {
                "id": "42",
                "name": "Ada Lovelace",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "link": link,
                "email": "a@example.com",
                "verified": true
            },
            "access_token": "tok123",
            "expires": "2030-01-01T00:00:00Z"
        })
    }

    #[actix_web::test]
    async fn test_callback_creates_and_returns_user() {
        let app = test::init_service(
            App::new()
                .app_data(resolution_service())
                .configure(configure_all_routes)
        ).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/facebook/callback")
            .set_json(facebook_body("http://www.facebook.com/ada.l"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["linked_providers"], json!(["facebook"]));
        assert_eq!(body["identities"][0]["alias"], "ada.l");
        assert_eq!(body["identities"][0]["display_name"]["full"], "Ada Lovelace");
        assert!(body["identities"][0].get("access_token").is_none());
    }

    #[actix_web::test]
    async fn test_repeat_callback_returns_same_user() {
        let app = test::init_service(
            App::new()
                .app_data(resolution_service())
                .configure(configure_all_routes)
        ).await;

        let mut ids = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/v1/auth/facebook/callback")
                .set_json(facebook_body("http://www.facebook.com/ada.l"))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            ids.push(body["id"].as_str().unwrap_or_default().to_string());
        }

        assert!(!ids[0].is_empty());
        assert_eq!(ids[0], ids[1]);
    }

    #[actix_web::test]
    async fn test_alias_failure_returns_generic_401() {
        let app = test::init_service(
            App::new()
                .app_data(resolution_service())
                .configure(configure_all_routes)
        ).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/facebook/callback")
            .set_json(facebook_body("https://m.facebook.com/ada.l"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "authentication_failed");
        assert!(!body.to_string().contains("m.facebook.com"));
    }

    #[actix_web::test]
    async fn test_missing_profile_id_returns_401() {
        let app = test::init_service(
            App::new()
                .app_data(resolution_service())
                .configure(configure_all_routes)
        ).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/instagram/callback")
            .set_json(json!({ "profile": { "username": "hipster" }, "access_token": "ig" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_unknown_provider_returns_400() {
        let app = test::init_service(
            App::new()
                .app_data(resolution_service())
                .configure(configure_all_routes)
        ).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/myspace/callback")
            .set_json(json!({ "profile": { "id": "1" }, "access_token": "tok" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_request");
    }

    #[actix_web::test]
    async fn test_invalid_body_returns_400() {
        let app = test::init_service(
            App::new()
                .app_data(resolution_service())
                .configure(configure_all_routes)
        ).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/facebook/callback")
            .set_json(json!({ "profile": { "id": "42" } }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/facebook/callback")
            .set_json(json!({ "profile": { "id": "42" }, "access_token": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
