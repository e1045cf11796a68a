use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Redirect,
    Form, Json,
};
use funnel::{LeadField, LeadForm};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::AppState;

/// Body of a plain `application/x-www-form-urlencoded` handoff post, for callers that
/// collect the lead themselves (the SPA hands off in the browser and never posts here).
/// Field names are the input ids; absent fields count as blank.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub clinic_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl From<OnboardForm> for LeadForm {
    fn from(form: OnboardForm) -> Self {
        let mut lead = LeadForm::new();
        lead.update_field(LeadField::FirstName, form.first_name);
        lead.update_field(LeadField::LastName, form.last_name);
        lead.update_field(LeadField::ClinicName, form.clinic_name);
        lead.update_field(LeadField::Email, form.email);
        lead.update_field(LeadField::Phone, form.phone);
        lead
    }
}

/// Runs the same handoff as the onboarding page: 303 to the scheduling page on success.
///
/// Rejections are 422 JSON naming the blank fields. A browser posting a form here
/// would show that JSON and lose what was typed, so callers keep their own copy.
pub async fn submit_onboard(
    State(state): State<Arc<AppState>>,
    Form(form): Form<OnboardForm>,
) -> Result<Redirect, (StatusCode, Json<Value>)> {
    let lead = LeadForm::from(form);

    match lead.submit(&state.handoff) {
        Ok(handoff) => {
            info!("Onboarding form handed off to scheduling");
            Ok(Redirect::to(&handoff.target))
        }
        Err(e) => {
            let missing: Vec<&str> = e.missing_fields().iter().map(|f| f.id()).collect();
            warn!("Onboarding form rejected, missing: {:?}", missing);
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": e.to_string(),
                    "missing": missing,
                })),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request},
        routing::post,
        Router,
    };
    use funnel::HandoffOptions;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app(handoff: HandoffOptions) -> Router {
        Router::new()
            .route("/api/onboard", post(submit_onboard))
            .with_state(Arc::new(AppState { handoff }))
    }

    fn form_post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/onboard")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_form_redirects_to_schedule() {
        let body = "firstName=Jane&lastName=Doe&clinicName=Tranquil+Massage\
                    &email=jane%40clinic.com&phone=%28555%29+123-4567";
        let response = app(HandoffOptions::default()).oneshot(form_post(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert_eq!(
            location,
            "/schedule?first_name=Jane&last_name=Doe&email=jane%40clinic.com&phone=5551234567\
             &organization=Tranquil+Massage&firstName=Jane&lastName=Doe&clinicName=Tranquil+Massage"
        );
    }

    #[tokio::test]
    async fn phone_number_alias_follows_config() {
        let options = HandoffOptions {
            include_phone_number_alias: true,
            ..HandoffOptions::default()
        };
        let body =
            "firstName=Jane&lastName=Doe&clinicName=Spa&email=j%40c.com&phone=%2B1+555+123+4567";
        let response = app(options).oneshot(form_post(body)).await.unwrap();

        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert!(location.ends_with("&phone_number=5551234567"));
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_without_redirect() {
        let body = "firstName=Jane&lastName=+++&clinicName=Spa&phone=5551234567";
        let response = app(HandoffOptions::default()).oneshot(form_post(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.headers().get(header::LOCATION).is_none());

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Please fill in all fields.");
        assert_eq!(json["missing"], json!(["lastName", "email"]));
    }

    #[tokio::test]
    async fn malformed_email_is_still_handed_off() {
        let body = "firstName=Jane&lastName=Doe&clinicName=Spa&email=not-an-email&phone=5551234567";
        let response = app(HandoffOptions::default()).oneshot(form_post(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert!(location.contains("&email=not-an-email&"));
    }
}
