use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::{get, post},
    Form, Router,
};
use tracing::{instrument, warn};

use super::{
    dto::RawFormInputs,
    page::PageView,
    services::{CheckController, SubmitOutcome},
};
use crate::{error::AppError, facts::random_fact, state::AppState};

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/check", post(check))
}

fn fresh_page() -> PageView {
    PageView::with_fact(random_fact(&mut rand::thread_rng()))
}

#[instrument(skip_all)]
pub async fn index() -> Html<String> {
    Html(fresh_page().to_document(&RawFormInputs::default(), None))
}

/// POST /check (urlencoded food, drink, age)
#[instrument(skip(state, form))]
pub async fn check(
    State(state): State<AppState>,
    form: Result<Form<RawFormInputs>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(raw) = form.map_err(|e| {
        warn!(error = %e, "bad check form");
        AppError::BadForm(e.body_text())
    })?;

    let controller =
        CheckController::with_slot(state.client.clone(), state.in_flight.clone(), fresh_page());
    let outcome = controller.submit(raw.clone()).await;
    let alert = match &outcome {
        SubmitOutcome::Rejected(e) => Some(e.to_string()),
        SubmitOutcome::Busy => return Err(AppError::Busy),
        SubmitOutcome::Rendered | SubmitOutcome::ConnectionFailed => None,
    };

    let page = controller.into_page();
    Ok(Html(page.to_document(&raw, alert.as_deref())))
}
