use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::models::answer::AnswerRecord;
use crate::models::question::Question;

/// Result of one answer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answers: Vec<String>,
    pub score: u32,
}

/// One quiz attempt: the loaded questions, recorded answers and running score.
#[derive(Debug, Default, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: HashMap<usize, AnswerRecord>,
    score: u32,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the question set and forgets all answers and score.
    pub fn load(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.answers.clear();
        self.score = 0;
    }

    pub fn reset(&mut self) {
        self.load(Vec::new());
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answer(&self, index: usize) -> Option<&AnswerRecord> {
        self.answers.get(&index)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Records an answer for the question at `question_index`.
    ///
    /// Selected texts are matched exactly against the options; the first
    /// option with equal text wins and unmatched texts are dropped. The answer
    /// is correct only when the matched positions equal the correct positions
    /// as sets. Only the first submission for a question can raise the score;
    /// later ones overwrite the stored record and leave the score alone.
    pub fn submit_answer(
        &mut self,
        question_index: Option<i64>,
        selected: Vec<String>,
    ) -> Result<AnswerOutcome> {
        let total = self.questions.len();
        let index = question_index
            .and_then(|i| usize::try_from(i).ok())
            .filter(|&i| i < total)
            .ok_or(Error::OutOfRange {
                index: question_index,
                total,
            })?;

        let question = &self.questions[index];
        let chosen: BTreeSet<usize> = selected
            .iter()
            .filter_map(|text| question.option_index(text))
            .collect();
        let expected: BTreeSet<usize> = question.correct.iter().copied().collect();
        let is_correct = chosen == expected;
        let correct_answers = question.correct_texts();

        let first_attempt = !self.answers.contains_key(&index);
        if first_attempt && is_correct {
            self.score += 1;
        }

        tracing::debug!(
            question_index = index,
            is_correct,
            first_attempt,
            score = self.score,
            "Answer recorded"
        );

        self.answers.insert(
            index,
            AnswerRecord {
                user_answer: selected,
                is_correct,
                correct_answer: correct_answers.clone(),
            },
        );

        Ok(AnswerOutcome {
            is_correct,
            correct_answers,
            score: self.score,
        })
    }
}

/// Shared, lock-guarded session owned by the HTTP layer.
#[derive(Clone, Debug, Default)]
pub struct SessionService {
    session: Arc<Mutex<QuizSession>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with exclusive access to the session.
    pub fn with_session<T>(&self, f: impl FnOnce(&mut QuizSession) -> T) -> Result<T> {
        let mut guard = self.lock()?;
        Ok(f(&mut *guard))
    }

    pub fn load(&self, questions: Vec<Question>) -> Result<()> {
        self.with_session(|s| s.load(questions))
    }

    pub fn reset(&self) -> Result<()> {
        self.with_session(QuizSession::reset)
    }

    pub fn submit_answer(
        &self,
        question_index: Option<i64>,
        selected: Vec<String>,
    ) -> Result<AnswerOutcome> {
        self.with_session(|s| s.submit_answer(question_index, selected))?
    }

    fn lock(&self) -> Result<MutexGuard<'_, QuizSession>> {
        self.session
            .lock()
            .map_err(|_| Error::Internal("session mutex poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::parse_service::ParseService;
    use pretty_assertions::assert_eq;

    fn loaded() -> QuizSession {
        let mut session = QuizSession::new();
        session.load(ParseService::parse_questions(
            "1. What is 2+2?\n+4\n-3\n-5\n2) Pick primes\n+2\n+3\n-4",
        ));
        session
    }

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reference_walkthrough() {
        let mut session = loaded();

        let first = session.submit_answer(Some(0), texts(&["4"])).unwrap();
        assert_eq!(
            first,
            AnswerOutcome {
                is_correct: true,
                correct_answers: texts(&["4"]),
                score: 1,
            }
        );

        let second = session.submit_answer(Some(1), texts(&["2"])).unwrap();
        assert!(!second.is_correct);
        assert_eq!(second.correct_answers, texts(&["2", "3"]));
        assert_eq!(second.score, 1);
    }

    #[test]
    fn multi_select_requires_exact_set_in_any_order() {
        let mut session = loaded();
        assert!(session.submit_answer(Some(1), texts(&["3", "2"])).unwrap().is_correct);

        let mut session = loaded();
        assert!(!session.submit_answer(Some(1), texts(&["2", "3", "4"])).unwrap().is_correct);

        let mut session = loaded();
        assert!(!session.submit_answer(Some(1), texts(&["3"])).unwrap().is_correct);
    }

    #[test]
    fn repeated_texts_collapse_to_one_selection() {
        let mut session = loaded();
        let outcome = session.submit_answer(Some(0), texts(&["4", "4"])).unwrap();
        assert!(outcome.is_correct);
    }

    #[test]
    fn unmatched_texts_are_dropped_silently() {
        let mut session = loaded();
        let outcome = session
            .submit_answer(Some(0), texts(&["4", "not an option"]))
            .unwrap();
        assert!(outcome.is_correct);
        assert_eq!(
            session.answer(0).unwrap().user_answer,
            texts(&["4", "not an option"])
        );
    }

    #[test]
    fn empty_selection_matches_question_without_correct_options() {
        let mut session = QuizSession::new();
        session.load(ParseService::parse_questions("1. Trick\n-a\n-b"));
        assert!(session.submit_answer(Some(0), vec![]).unwrap().is_correct);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn score_only_counts_first_submission() {
        let mut session = loaded();
        session.submit_answer(Some(0), texts(&["3"])).unwrap();
        let retry = session.submit_answer(Some(0), texts(&["4"])).unwrap();
        assert!(retry.is_correct);
        assert_eq!(retry.score, 0);
        assert!(session.answer(0).unwrap().is_correct);

        let mut session = loaded();
        session.submit_answer(Some(0), texts(&["4"])).unwrap();
        let again = session.submit_answer(Some(0), texts(&["4"])).unwrap();
        assert_eq!(again.score, 1);
        let worse = session.submit_answer(Some(0), texts(&["5"])).unwrap();
        assert!(!worse.is_correct);
        assert_eq!(worse.score, 1);
        assert!(!session.answer(0).unwrap().is_correct);
    }

    #[test]
    fn out_of_range_indices_are_rejected_without_mutation() {
        let mut session = loaded();
        for index in [None, Some(-1), Some(2), Some(i64::MAX)] {
            let err = session.submit_answer(index, texts(&["4"])).unwrap_err();
            assert!(matches!(err, Error::OutOfRange { total: 2, .. }));
        }
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn load_and_reset_clear_progress() {
        let mut session = loaded();
        session.submit_answer(Some(0), texts(&["4"])).unwrap();

        session.load(ParseService::parse_questions("1. New\n+x"));
        assert_eq!(session.questions().len(), 1);
        assert_eq!(session.score(), 0);
        assert!(session.answer(0).is_none());

        session.submit_answer(Some(0), texts(&["x"])).unwrap();
        session.reset();
        assert!(session.questions().is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn shared_service_serialises_access() {
        let service = SessionService::new();
        service
            .load(ParseService::parse_questions("1. Q\n+a\n-b"))
            .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let svc = service.clone();
                std::thread::spawn(move || svc.submit_answer(Some(0), vec!["a".into()]).is_ok())
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }

        assert_eq!(service.with_session(|s| s.score()).unwrap(), 1);
        service.reset().unwrap();
        assert_eq!(service.with_session(|s| s.questions().len()).unwrap(), 0);
    }
}
