use std::fmt;

use crate::model::Lesson;

/// Result of activating one quiz choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizFeedback {
    /// Carries the text of the correct choice.
    Correct(String),
    TryAgain,
}

impl QuizFeedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, QuizFeedback::Correct(_))
    }

    /// Text shown in the answer panel.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            QuizFeedback::Correct(choice) => format!("Correct! {choice}"),
            QuizFeedback::TryAgain => "Try again.".to_string(),
        }
    }
}

impl fmt::Display for QuizFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Text shown when the user asks for the official answer.
#[must_use]
pub fn answer_reveal(lesson: &Lesson) -> String {
    format!("Answer: {}", lesson.correct_choice())
}
