//! Contact-form inquiry handlers.
//!
//! ```text
//! POST /api/inquiries {"name":"Rajesh Kumar","phone":"+91 98400 00000","serviceType":"premium","location":"Sholinganallur"}
//! GET /api/inquiries
//! ```

use actix_web::{get, post, web};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, Inquiry, NewInquiry};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{InquiryRequestSchema, InquirySchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validation_error;

const INVALID_INQUIRY: &str = "Invalid inquiry data";

/// Body of a successful `POST /api/inquiries`.
#[derive(Debug, Serialize, ToSchema)]
pub struct InquiryCreated {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = InquirySchema)]
    pub inquiry: Inquiry,
}

/// Body of a successful `GET /api/inquiries`.
#[derive(Debug, Serialize, ToSchema)]
pub struct InquiryList {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = Vec<InquirySchema>)]
    pub inquiries: Vec<Inquiry>,
}

/// Record a contact-form submission.
#[utoipa::path(
    post,
    path = "/api/inquiries",
    request_body = InquiryRequestSchema,
    responses(
        (status = 200, description = "Inquiry stored", body = InquiryCreated),
        (status = 400, description = "Invalid inquiry data", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["inquiries"],
    operation_id = "createInquiry"
)]
#[post("/inquiries")]
pub async fn create_inquiry(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<InquiryCreated>> {
    let draft =
        NewInquiry::from_json(&payload).map_err(|err| validation_error(&err, INVALID_INQUIRY))?;
    let inquiry = state
        .inquiries
        .create_inquiry(draft)
        .await
        .map_err(|err| Error::from(err).with_context("Failed to save inquiry"))?;
    info!(
        inquiry_id = %inquiry.id(),
        service_type = inquiry.service_type(),
        "inquiry received"
    );
    Ok(web::Json(InquiryCreated {
        success: true,
        inquiry,
    }))
}

/// List every inquiry in the order received.
#[utoipa::path(
    get,
    path = "/api/inquiries",
    responses(
        (status = 200, description = "Stored inquiries", body = InquiryList),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["inquiries"],
    operation_id = "listInquiries"
)]
#[get("/inquiries")]
pub async fn list_inquiries(state: web::Data<HttpState>) -> ApiResult<web::Json<InquiryList>> {
    let inquiries = state
        .inquiries
        .inquiries()
        .await
        .map_err(|err| Error::from(err).with_context("Failed to fetch inquiries"))?;
    Ok(web::Json(InquiryList {
        success: true,
        inquiries,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockBookingRepository, MockInquiryRepository, StoreError};
    use crate::inbound::http::test_utils::{memory_state, state_with};
    use crate::inbound::http::validation::json_config;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::{fixture, rstest};
    use serde_json::json;

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .service(
                web::scope("/api")
                    .service(create_inquiry)
                    .service(list_inquiries),
            )
    }

    #[fixture]
    fn payload() -> Value {
        json!({
            "name": "Rajesh Kumar",
            "phone": "+91 98400 00000",
            "email": "rajesh@example.com",
            "serviceType": "premium",
            "location": "Sholinganallur",
            "message": "Two cars, same slot",
            "preferredDate": "2026-10-18",
        })
    }

    async fn post(state: HttpState, body: Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(state)).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/inquiries")
            .set_json(&body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        (status, actix_test::read_body_json(response).await)
    }

    #[rstest]
    #[actix_web::test]
    async fn valid_inquiry_is_echoed_with_id(payload: Value) {
        let (status, body) = post(memory_state(), payload).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["inquiry"]["id"], json!(1));
        assert_eq!(body["inquiry"]["email"], json!("rajesh@example.com"));
        assert_eq!(body["inquiry"]["createdAt"], json!("2026-10-16T09:00:00Z"));
    }

    #[rstest]
    #[actix_web::test]
    async fn invalid_email_is_rejected(mut payload: Value) {
        payload["email"] = json!("not-an-email");
        let (status, body) = post(memory_state(), payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!(INVALID_INQUIRY));
        assert_eq!(body["error"], json!("email must be a valid email address"));
        assert_eq!(body["details"], json!({"field": "email", "code": "invalid_email"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn store_failure_is_a_redacted_500(payload: Value) {
        let mut inquiries = MockInquiryRepository::new();
        inquiries
            .expect_create_inquiry()
            .times(1)
            .returning(|_| Err(StoreError::unavailable("lock poisoned")));
        let state = state_with(inquiries, MockBookingRepository::new());

        let (status, body) = post(state, payload).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Internal server error"));
        assert!(!body.to_string().contains("lock poisoned"));
    }

    #[rstest]
    #[actix_web::test]
    async fn listing_failure_is_a_redacted_500() {
        let mut inquiries = MockInquiryRepository::new();
        inquiries
            .expect_inquiries()
            .returning(|| Err(StoreError::unavailable("lock poisoned")));
        let app = actix_test::init_service(test_app(state_with(
            inquiries,
            MockBookingRepository::new(),
        )))
        .await;

        let request = actix_test::TestRequest::get()
            .uri("/api/inquiries")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], json!("Failed to fetch inquiries"));
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_json_is_a_400() {
        let app = actix_test::init_service(test_app(memory_state())).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/inquiries")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["details"]["code"], json!("malformed_json"));
    }
}
