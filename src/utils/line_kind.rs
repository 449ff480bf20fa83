//! Classification of a single quiz-file line.
//!
//! Markers are checked in a fixed order: the question-number pattern wins over
//! the `-` option marker, so `3-something` opens question 3.

use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    NewQuestion { number: u64, text: &'a str },
    CorrectOption(&'a str),
    IncorrectOption(&'a str),
    Continuation(&'a str),
}

fn question_start() -> &'static Regex {
    static QUESTION_START: OnceLock<Regex> = OnceLock::new();
    QUESTION_START.get_or_init(|| {
        Regex::new(r"^([0-9]+)[.)\-]\s*(.*)$").expect("Invalid question-start regex")
    })
}

/// Classifies an already trimmed, non-blank line.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = question_start().captures(line) {
        let digits = caps.get(1).map_or("", |m| m.as_str());
        let rest = caps.get(2).map_or("", |m| m.as_str());
        // Numerals past u64::MAX saturate; the line still opens a question.
        let number = digits.parse::<u64>().unwrap_or(u64::MAX);
        return LineKind::NewQuestion {
            number,
            text: rest.trim(),
        };
    }

    if let Some(rest) = line.strip_prefix('+') {
        return LineKind::CorrectOption(rest.trim());
    }
    if let Some(rest) = line.strip_prefix('-') {
        return LineKind::IncorrectOption(rest.trim());
    }

    LineKind::Continuation(line)
}
