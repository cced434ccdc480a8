use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{QuestId, RawAnswers, Session};
use super::quests::{NewQuest, QuestError};
use super::repository::RecordStore;
use super::service::{AccountError, CheckInDraft, CompanionService, ServiceError};
use crate::catalog::domains::all_companions;
use crate::catalog::{AssessmentAnswer, DomainId};

/// Router exposing check-in evaluation, accounts, quests, and catalog reads.
pub fn companion_router<S>(service: Arc<CompanionService<S>>) -> Router
where
    S: RecordStore + 'static,
{
    Router::new()
        .route("/api/v1/checkins/evaluate", post(evaluate_handler::<S>))
        .route("/api/v1/accounts", post(create_account_handler::<S>))
        .route("/api/v1/sessions", post(login_handler::<S>))
        .route("/api/v1/users/:email", get(user_handler::<S>))
        .route(
            "/api/v1/users/:email/checkins",
            post(save_check_in_handler::<S>),
        )
        .route("/api/v1/users/:email/progress", get(progress_handler::<S>))
        .route("/api/v1/users/:email/quests", post(add_quest_handler::<S>))
        .route(
            "/api/v1/users/:email/quests/:quest_id/complete",
            post(complete_quest_handler::<S>),
        )
        .route(
            "/api/v1/users/:email/quests/:quest_id",
            delete(remove_quest_handler::<S>),
        )
        .route("/api/v1/catalog/companions", get(companions_handler))
        .route(
            "/api/v1/catalog/health-types",
            get(health_types_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluateRequest {
    #[serde(default)]
    answers: RawAnswers,
    #[serde(default)]
    assessment: Option<Vec<AssessmentAnswer>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccountRequest {
    email: String,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    email: String,
}

/// Either a catalog suggestion (`index`) or a free-text quest (`text`).
#[derive(Debug, Deserialize)]
pub(crate) struct AddQuestRequest {
    domain: DomainId,
    #[serde(default)]
    index: Option<usize>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    icon: Option<String>,
}

fn error_response(status: StatusCode, message: impl ToString) -> Response {
    let payload = json!({
        "error": message.to_string(),
    });
    (status, Json(payload)).into_response()
}

fn service_error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::Account(AccountError::NotFound) => StatusCode::NOT_FOUND,
        ServiceError::Account(AccountError::AlreadyExists) => StatusCode::CONFLICT,
        ServiceError::Account(AccountError::MissingEmail) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Quest(QuestError::NotFound(_)) => StatusCode::NOT_FOUND,
        ServiceError::Quest(QuestError::AlreadyCompleted(_)) => StatusCode::CONFLICT,
        ServiceError::Quest(QuestError::EmptyText)
        | ServiceError::Catalog(_)
        | ServiceError::UnknownSuggestion { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Account(AccountError::Store(_)) | ServiceError::Store(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, error)
}

fn session_for<S>(service: &CompanionService<S>, email: &str) -> Result<Session, Response>
where
    S: RecordStore + 'static,
{
    service
        .session_for(email)
        .map(|(session, _)| session)
        .map_err(|error| service_error_response(error.into()))
}

pub(crate) async fn evaluate_handler<S>(
    State(service): State<Arc<CompanionService<S>>>,
    Json(request): Json<EvaluateRequest>,
) -> Response
where
    S: RecordStore + 'static,
{
    let evaluation = service.evaluate(&request.answers);
    let assessment = match request.assessment.as_deref() {
        Some(answers) => match service.assess(answers) {
            Ok(classification) => Some(classification),
            Err(error) => return service_error_response(error),
        },
        None => None,
    };

    let payload = json!({
        "evaluation": evaluation,
        "assessment": assessment,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn create_account_handler<S>(
    State(service): State<Arc<CompanionService<S>>>,
    Json(request): Json<AccountRequest>,
) -> Response
where
    S: RecordStore + 'static,
{
    match service.create_account(&request.email, &request.name) {
        Ok((session, record)) => {
            let payload = json!({ "session": session, "user": record });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(error) => service_error_response(error.into()),
    }
}

pub(crate) async fn login_handler<S>(
    State(service): State<Arc<CompanionService<S>>>,
    Json(request): Json<LoginRequest>,
) -> Response
where
    S: RecordStore + 'static,
{
    match service.session_for(&request.email) {
        Ok((session, record)) => {
            let payload = json!({ "session": session, "user": record });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => service_error_response(error.into()),
    }
}

pub(crate) async fn user_handler<S>(
    State(service): State<Arc<CompanionService<S>>>,
    Path(email): Path<String>,
) -> Response
where
    S: RecordStore + 'static,
{
    match service.session_for(&email) {
        Ok((_, record)) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => service_error_response(error.into()),
    }
}

pub(crate) async fn save_check_in_handler<S>(
    State(service): State<Arc<CompanionService<S>>>,
    Path(email): Path<String>,
    Json(draft): Json<CheckInDraft>,
) -> Response
where
    S: RecordStore + 'static,
{
    let session = match session_for(&service, &email) {
        Ok(session) => session,
        Err(response) => return response,
    };
    match service.save_check_in(&session, draft) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn progress_handler<S>(
    State(service): State<Arc<CompanionService<S>>>,
    Path(email): Path<String>,
) -> Response
where
    S: RecordStore + 'static,
{
    let session = match session_for(&service, &email) {
        Ok(session) => session,
        Err(response) => return response,
    };
    match service.progress(&session) {
        Ok(progress) => (StatusCode::OK, Json(progress)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn add_quest_handler<S>(
    State(service): State<Arc<CompanionService<S>>>,
    Path(email): Path<String>,
    Json(request): Json<AddQuestRequest>,
) -> Response
where
    S: RecordStore + 'static,
{
    let session = match session_for(&service, &email) {
        Ok(session) => session,
        Err(response) => return response,
    };
    let result = match (request.index, request.text) {
        (Some(index), _) => service.add_suggested_quest(&session, request.domain, index),
        (None, Some(text)) => service.add_quest(
            &session,
            NewQuest::custom(request.domain, text, request.icon),
        ),
        (None, None) => {
            return error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "either 'index' or 'text' is required",
            )
        }
    };
    match result {
        Ok(quest) => (StatusCode::CREATED, Json(quest)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn complete_quest_handler<S>(
    State(service): State<Arc<CompanionService<S>>>,
    Path((email, quest_id)): Path<(String, String)>,
) -> Response
where
    S: RecordStore + 'static,
{
    let session = match session_for(&service, &email) {
        Ok(session) => session,
        Err(response) => return response,
    };
    let result = service.complete_quest(&session, &QuestId(quest_id), &mut rand::thread_rng());
    match result {
        Ok(element) => (StatusCode::OK, Json(element)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn remove_quest_handler<S>(
    State(service): State<Arc<CompanionService<S>>>,
    Path((email, quest_id)): Path<(String, String)>,
) -> Response
where
    S: RecordStore + 'static,
{
    let session = match session_for(&service, &email) {
        Ok(session) => session,
        Err(response) => return response,
    };
    match service.remove_quest(&session, &QuestId(quest_id)) {
        Ok(quest) => (StatusCode::OK, Json(quest)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn companions_handler() -> Response {
    let companions: Vec<_> = all_companions().collect();
    (StatusCode::OK, Json(companions)).into_response()
}

pub(crate) async fn health_types_handler<S>(
    State(service): State<Arc<CompanionService<S>>>,
) -> Response
where
    S: RecordStore + 'static,
{
    let payload = json!({
        "strategy": service.classifier().as_str(),
        "types": service.classifier().catalog(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}
