use serde::{Deserialize, Serialize};

/// Latest submission recorded for one question position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Raw option texts as submitted, including ones that matched nothing.
    pub user_answer: Vec<String>,
    /// Frozen at submission time.
    pub is_correct: bool,
    /// Correct option texts as they were when the answer was recorded.
    pub correct_answer: Vec<String>,
}
