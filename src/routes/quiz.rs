use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    response::Json,
};
use validator::Validate;

use crate::dto::quiz_dto::{
    ResetResponse, SubmitAnswerRequest, SubmitAnswerResponse, UploadResponse,
};
use crate::error::{Error, Result};
use crate::services::parse_service::ParseService;
use crate::services::report_service::{QuizReport, ReportService};
use crate::services::upload_service::UploadService;
use crate::AppState;

#[axum::debug_handler]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(Error::Multipart)? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let data = field.bytes().await.map_err(Error::Multipart)?;
        upload = Some((filename, data));
        break;
    }

    let Some((filename, data)) = upload else {
        tracing::warn!("Upload rejected: no file field");
        return Err(Error::invalid_upload("missing_file", "No file was uploaded"));
    };

    let text = UploadService::decode(filename.as_deref(), &data).map_err(|e| {
        tracing::warn!("Upload rejected: {}", e);
        e
    })?;
    state.upload_service.archive(&data).await?;

    let questions = ParseService::parse_questions(&text);
    state.session_service.load(questions.clone())?;

    tracing::info!(
        "Quiz loaded from {}: {} questions",
        filename.as_deref().unwrap_or("upload"),
        questions.len()
    );

    Ok(Json(UploadResponse {
        total_questions: questions.len(),
        questions,
    }))
}

#[axum::debug_handler]
pub async fn submit_answer(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SubmitAnswerRequest>, JsonRejection>,
) -> Result<Json<SubmitAnswerResponse>> {
    let Json(req) = payload.map_err(|e| Error::BadRequest(e.body_text()))?;
    req.validate()?;
    let outcome = state
        .session_service
        .submit_answer(req.question_index, req.selected_options)
        .map_err(|e| {
            tracing::warn!("Answer rejected: {}", e);
            e
        })?;
    Ok(Json(outcome.into()))
}

#[axum::debug_handler]
pub async fn get_results(State(state): State<AppState>) -> Result<Json<QuizReport>> {
    let report = state.session_service.with_session(|s| ReportService::build(s))?;
    Ok(Json(report))
}

#[axum::debug_handler]
pub async fn reset(State(state): State<AppState>) -> Result<Json<ResetResponse>> {
    state.session_service.reset()?;
    tracing::info!("Quiz session reset");
    Ok(Json(ResetResponse {
        status: "reset".to_string(),
    }))
}
