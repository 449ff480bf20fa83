use crate::models::question::Question;
use crate::utils::line_kind::{classify, LineKind};

/// Turns quiz text into questions.
///
/// Parsing is total: lines that fit nowhere are dropped, so any input yields
/// some (possibly empty) list.
pub struct ParseService;

impl ParseService {
    pub fn parse_questions(text: &str) -> Vec<Question> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut questions = Vec::new();
        let mut current: Option<Question> = None;

        for line in text.split(['\n', '\r']) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match (classify(line), &mut current) {
                (LineKind::NewQuestion { number, text }, slot) => {
                    if let Some(done) = slot.replace(Question::new(number, text)) {
                        questions.push(done);
                    }
                }
                (_, None) => {
                    tracing::trace!(line, "Skipping line outside of any question");
                }
                (LineKind::CorrectOption(option), Some(question)) => {
                    question.push_option(option, true);
                }
                (LineKind::IncorrectOption(option), Some(question)) => {
                    question.push_option(option, false);
                }
                (LineKind::Continuation(more), Some(question)) => {
                    if !question.text.is_empty() {
                        question.text.push(' ');
                    }
                    question.text.push_str(more);
                }
            }
        }

        if let Some(done) = current {
            questions.push(done);
        }

        tracing::debug!(count = questions.len(), "Parsed quiz text");
        questions
    }
}
