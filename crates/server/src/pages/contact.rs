use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use maud::{html, Markup};
use service::contact::{ContactRequest, ContactResponse};
use service::errors::ServiceError;
use tracing::warn;

use crate::errors::ApiError;
use crate::state::{AppState, SiteContext};
use crate::views::layout::{self, PageMeta};

const SUCCESS_MESSAGE: &str = "Merci, votre message a bien été envoyé.";

pub async fn page(State(state): State<AppState>) -> Markup {
    form_page(&state.site, None, &ContactRequest::default())
}

/// Plain form post, for browsers without JavaScript.
pub async fn submit_form(State(state): State<AppState>, Form(req): Form<ContactRequest>) -> Response {
    match state.contact.submit(req.clone()) {
        Ok(_) => form_page(&state.site, Some(Notice::Sent), &ContactRequest::default()).into_response(),
        Err(ServiceError::Validation(msg)) => (
            StatusCode::BAD_REQUEST,
            form_page(&state.site, Some(Notice::Invalid(msg)), &req),
        )
            .into_response(),
    }
}

/// `POST /api/contact`.
pub async fn submit_api(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(req) = payload.map_err(reject_payload)?;
    match state.contact.submit(req) {
        Ok(_) => Ok(Json(ContactResponse::ok(SUCCESS_MESSAGE))),
        Err(ServiceError::Validation(msg)) => Err(ApiError::new(StatusCode::BAD_REQUEST, msg)),
    }
}

/// Oversized bodies are the sender's fault (413); a body that could not be
/// read for any other reason is ours (500); anything else is a bad request.
fn reject_payload(rejection: JsonRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!(error = %rejection, "contact payload over the body limit");
        return ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "Message trop long");
    }
    if matches!(rejection, JsonRejection::BytesRejection(_)) {
        return ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Erreur interne, réessayez plus tard");
    }
    warn!(error = %rejection, "unreadable contact payload");
    ApiError::new(StatusCode::BAD_REQUEST, "Requête invalide")
}

enum Notice {
    Sent,
    Invalid(String),
}

fn form_page(site: &SiteContext, notice: Option<Notice>, values: &ContactRequest) -> Markup {
    let meta = PageMeta::new(
        "Contact",
        format!("Parlez-nous de votre projet : {} vous répond sous 48 h.", site.name),
        "/contact",
    );
    let body = html! {
        section.page-intro data-reveal {
            h1 { "Contact" }
            p.lead {
                "Un projet, une question ? Écrivez-nous ou passez par "
                a href={ "mailto:" (site.contact_email) } { (site.contact_email) } "."
            }
        }
        @match &notice {
            Some(Notice::Sent) => p.notice.success role="status" { (SUCCESS_MESSAGE) },
            Some(Notice::Invalid(msg)) => p.notice.error role="alert" { (msg) },
            None => {},
        }
        form.contact-form method="post" action="/contact" data-api="/api/contact" data-reveal {
            label for="name" { "Nom" }
            input id="name" type="text" name="name" required maxlength="200"
                value=(values.name.as_deref().unwrap_or_default());
            label for="email" { "E-mail" }
            input id="email" type="email" name="email" required
                value=(values.email.as_deref().unwrap_or_default());
            label for="message" { "Message" }
            textarea id="message" name="message" rows="6" required maxlength="5000" {
                (values.message.as_deref().unwrap_or_default())
            }
            button.button type="submit" { "Envoyer" }
        }
    };
    layout::page(site, &meta, body)
}
