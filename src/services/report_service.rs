use serde::{Deserialize, Serialize};

use crate::services::session_service::QuizSession;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    /// 1-based position in the loaded quiz, not the numeral from the file.
    pub question_number: usize,
    pub question_text: String,
    pub user_answer: Vec<String>,
    pub correct_answer: Vec<String>,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizReport {
    pub score: u32,
    pub total_questions: usize,
    pub percentage: u32,
    pub detailed_results: Vec<QuestionResult>,
}

pub struct ReportService;

impl ReportService {
    /// Builds the final report over every loaded question.
    ///
    /// Correct answers are read from the current question set; the stored
    /// correctness flag of each answer is reported as recorded.
    pub fn build(session: &QuizSession) -> QuizReport {
        let detailed_results = session
            .questions()
            .iter()
            .enumerate()
            .map(|(idx, q)| {
                let (user_answer, is_correct) = match session.answer(idx) {
                    Some(record) => (record.user_answer.clone(), record.is_correct),
                    None => (Vec::new(), false),
                };
                QuestionResult {
                    question_number: idx + 1,
                    question_text: q.text.clone(),
                    user_answer,
                    correct_answer: q.correct_texts(),
                    is_correct,
                }
            })
            .collect::<Vec<_>>();

        let total_questions = session.questions().len();
        QuizReport {
            score: session.score(),
            total_questions,
            percentage: percentage(session.score(), total_questions),
            detailed_results,
        }
    }
}

/// Whole-number percentage, halves rounded to even. An empty quiz is 0%.
pub fn percentage(score: u32, total: usize) -> u32 {
    let ratio = f64::from(score) / total.max(1) as f64;
    (ratio * 100.0).round_ties_even() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::parse_service::ParseService;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const QUIZ: &str = "1. What is 2+2?\n+4\n-3\n-5\n2) Pick primes\n+2\n+3\n-4";

    #[rstest]
    #[case(0, 0, 0)]
    #[case(0, 3, 0)]
    #[case(3, 3, 100)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(1, 8, 12)]
    #[case(3, 8, 38)]
    fn percentage_rounding(#[case] score: u32, #[case] total: usize, #[case] expected: u32) {
        assert_eq!(percentage(score, total), expected);
    }

    #[test]
    fn empty_session_report() {
        let mut session = QuizSession::new();
        session.load(ParseService::parse_questions(QUIZ));
        session.submit_answer(Some(0), vec!["4".into()]).unwrap();
        session.reset();

        assert_eq!(
            ReportService::build(&session),
            QuizReport {
                score: 0,
                total_questions: 0,
                percentage: 0,
                detailed_results: vec![],
            }
        );
    }

    #[test]
    fn covers_answered_and_unanswered_questions_in_order() {
        let mut session = QuizSession::new();
        session.load(ParseService::parse_questions(QUIZ));
        session
            .submit_answer(Some(1), vec!["3".into(), "2".into()])
            .unwrap();

        let report = ReportService::build(&session);
        assert_eq!(report.score, 1);
        assert_eq!(report.total_questions, 2);
        assert_eq!(report.percentage, 50);
        assert_eq!(
            report.detailed_results,
            vec![
                QuestionResult {
                    question_number: 1,
                    question_text: "What is 2+2?".into(),
                    user_answer: vec![],
                    correct_answer: vec!["4".into()],
                    is_correct: false,
                },
                QuestionResult {
                    question_number: 2,
                    question_text: "Pick primes".into(),
                    user_answer: vec!["3".into(), "2".into()],
                    correct_answer: vec!["2".into(), "3".into()],
                    is_correct: true,
                },
            ]
        );
    }

    #[test]
    fn perfect_score_is_one_hundred_percent() {
        let mut session = QuizSession::new();
        session.load(ParseService::parse_questions(QUIZ));
        session.submit_answer(Some(0), vec!["4".into()]).unwrap();
        session
            .submit_answer(Some(1), vec!["2".into(), "3".into()])
            .unwrap();
        assert_eq!(ReportService::build(&session).percentage, 100);
    }

    #[test]
    fn report_reflects_latest_submission_but_first_score() {
        let mut session = QuizSession::new();
        session.load(ParseService::parse_questions(QUIZ));
        session.submit_answer(Some(0), vec!["4".into()]).unwrap();
        session.submit_answer(Some(0), vec!["5".into()]).unwrap();

        let report = ReportService::build(&session);
        assert_eq!(report.score, 1);
        assert_eq!(report.detailed_results[0].user_answer, vec!["5".to_string()]);
        assert!(!report.detailed_results[0].is_correct);
    }
}
