use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::api::resend::{self, MailError};
use crate::handlers::contact_dtos::WaitlistSubmission;
use crate::AppState;

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({"message": "Method Not Allowed"})),
    )
}

/// Relays a waitlist submission to the inbox configured in `TO_EMAIL`.
pub async fn send_email(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let submission = WaitlistSubmission::from_body(&body);

    let contact = submission.contact().ok_or((
        StatusCode::BAD_REQUEST,
        Json(json!({"message": "Missing required fields"})),
    ))?;

    let api_key = state.config.resend_api_key.as_deref().ok_or_else(|| {
        tracing::error!("RESEND_API_KEY missing, cannot relay waitlist submission");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "Missing API key"})),
        )
    })?;

    let email = resend::compose_waitlist_email(
        &contact,
        &state.config.from_email,
        &state.config.to_email,
    );

    match resend::send_email(&state.http, &state.config.resend_api_url, api_key, &email).await {
        Ok(id) => {
            tracing::info!(provider_id = ?id, "waitlist submission relayed");
            Ok(Json(json!({"ok": true, "id": id})))
        }
        Err(MailError::Rejected { status, details }) => {
            tracing::warn!(status, "email provider rejected waitlist submission");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({"message": "Failed to send email", "details": details})),
            ))
        }
        Err(err) => {
            tracing::error!("failed to relay waitlist submission: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "Unexpected error", "error": err.to_string()})),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use axum::{
        body::Body,
        http::{header, HeaderMap, Request},
        routing::post,
        Router,
    };
    use http_body_util::BodyExt;
    use tokio::net::TcpListener;
    use tower::ServiceExt;

    use super::*;
    use crate::config::app_config::AppConfig;

    type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    #[derive(Clone)]
    struct FakeProvider {
        status: StatusCode,
        reply: Value,
        seen: Seen,
    }

    async fn fake_emails(
        State(fake): State<FakeProvider>,
        headers: HeaderMap,
        Json(payload): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        fake.seen.lock().unwrap().push((auth, payload));
        (fake.status, Json(fake.reply.clone()))
    }

    async fn spawn_provider(status: StatusCode, reply: Value) -> (String, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let router = Router::new()
            .route("/emails", post(fake_emails))
            .with_state(FakeProvider {
                status,
                reply,
                seen: seen.clone(),
            });
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (format!("http://{}", addr), seen)
    }

    fn state(api_url: &str, api_key: Option<&str>) -> Arc<AppState> {
        Arc::new(AppState::new(AppConfig {
            resend_api_key: api_key.map(str::to_string),
            to_email: "inbox@nousu.test".to_string(),
            from_email: "onboarding@resend.dev".to_string(),
            resend_api_url: api_url.to_string(),
            static_dir: PathBuf::from("does-not-exist"),
            bind_addr: "127.0.0.1:0".to_string(),
        }))
    }

    async fn call(state: Arc<AppState>, method: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri("/api/send-email")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = crate::app(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    const FULL_FORM: &str =
        r#"{"name":"Jane Doe","company":"Acme","email":"jane@acme.com","jobTitle":"VP of Sales","message":"We need meetings"}"#;

    #[tokio::test]
    async fn relays_submission_to_provider() {
        let (url, seen) = spawn_provider(StatusCode::OK, json!({"id": "email_123"})).await;

        let (status, body) = call(state(&url, Some("re_test")), "POST", FULL_FORM).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true, "id": "email_123"}));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (auth, payload) = &seen[0];
        assert_eq!(auth.as_deref(), Some("Bearer re_test"));
        assert_eq!(payload["to"], json!(["inbox@nousu.test"]));
        assert_eq!(payload["from"], "onboarding@resend.dev");
        assert_eq!(payload["reply_to"], "jane@acme.com");
        assert_eq!(payload["subject"], resend::WAITLIST_SUBJECT);
        assert!(payload["text"].as_str().unwrap().contains("Job Title: VP of Sales"));
    }

    #[tokio::test]
    async fn missing_provider_id_is_null() {
        let (url, _) = spawn_provider(StatusCode::OK, json!({})).await;
        let (status, body) = call(state(&url, Some("re_test")), "POST", FULL_FORM).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true, "id": null}));
    }

    #[tokio::test]
    async fn other_methods_are_not_allowed() {
        let (status, body) = call(state("http://127.0.0.1:9", Some("k")), "GET", "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"message": "Method Not Allowed"}));
    }

    #[tokio::test]
    async fn missing_required_fields_are_rejected() {
        let (url, seen) = spawn_provider(StatusCode::OK, json!({"id": "x"})).await;
        let (status, body) = call(
            state(&url, Some("re_test")),
            "POST",
            r#"{"name":"Jane Doe","email":"jane@acme.com"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Missing required fields"}));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unreadable_body_counts_as_empty_form() {
        let (status, body) = call(state("http://127.0.0.1:9", Some("k")), "POST", "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Missing required fields");
    }

    #[tokio::test]
    async fn numeric_job_title_is_relayed_as_text() {
        let (url, seen) = spawn_provider(StatusCode::OK, json!({"id": "email_7"})).await;
        let (status, body) = call(
            state(&url, Some("re_test")),
            "POST",
            r#"{"name":"Jane Doe","company":"Acme","email":"jane@acme.com","jobTitle":7}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true, "id": "email_7"}));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].1["text"].as_str().unwrap().contains("Job Title: 7"));
    }

    #[tokio::test]
    async fn missing_api_key_is_a_server_error() {
        let (status, body) = call(state("http://127.0.0.1:9", None), "POST", FULL_FORM).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Missing API key"}));
    }

    #[tokio::test]
    async fn provider_rejection_is_a_bad_gateway() {
        let reply = json!({"statusCode": 422, "message": "Invalid `to` field"});
        let (url, _) = spawn_provider(StatusCode::UNPROCESSABLE_ENTITY, reply.clone()).await;
        let (status, body) = call(state(&url, Some("re_test")), "POST", FULL_FORM).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, json!({"message": "Failed to send email", "details": reply}));
    }

    #[tokio::test]
    async fn unreachable_provider_is_unexpected_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let (status, body) = call(state(&url, Some("re_test")), "POST", FULL_FORM).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Unexpected error");
        assert!(body["error"].as_str().unwrap().contains("could not reach email provider"));
    }

    #[tokio::test]
    async fn health_check_answers() {
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = crate::app(state("http://127.0.0.1:9", None))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
