use serde::{Deserialize, Serialize};

/// One parsed quiz question.
///
/// `correct` holds positions into `options`, in ascending order. Options are
/// identified by position only, so two options may share the same text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Numeral written by the file author. Not guaranteed unique or sequential.
    pub number: u64,
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct: Vec<usize>,
    /// Always empty: the text format has no syntax for explanations.
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn new(number: u64, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            options: Vec::new(),
            correct: Vec::new(),
            explanation: String::new(),
        }
    }

    pub fn push_option(&mut self, text: impl Into<String>, is_correct: bool) {
        self.options.push(text.into());
        if is_correct {
            self.correct.push(self.options.len() - 1);
        }
    }

    /// Texts of the correct options, in option order.
    pub fn correct_texts(&self) -> Vec<String> {
        self.correct
            .iter()
            .filter_map(|&i| self.options.get(i).cloned())
            .collect()
    }

    /// First option whose text equals `text` exactly.
    pub fn option_index(&self, text: &str) -> Option<usize> {
        self.options.iter().position(|o| o == text)
    }
}
