use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::question::Question;
use crate::services::session_service::AnswerOutcome;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    #[serde(default)]
    pub question_index: Option<i64>,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub selected_options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub is_correct: bool,
    pub correct_answers: Vec<String>,
    pub score: u32,
}

impl From<AnswerOutcome> for SubmitAnswerResponse {
    fn from(outcome: AnswerOutcome) -> Self {
        Self {
            is_correct: outcome.is_correct,
            correct_answers: outcome.correct_answers,
            score: outcome.score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    pub status: String,
}
