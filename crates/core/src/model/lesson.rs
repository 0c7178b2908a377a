use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::chart::CHART_LABELS;
use crate::model::ids::LessonId;
use crate::quiz::QuizFeedback;

//
// ─── LESSON DRAFT ──────────────────────────────────────────────────────────────
//

/// Serialized shape of a lesson as it appears in a catalog file.
///
/// Accepts both `snake_case` keys and the camelCase keys used by older
/// page scripts (`correctIndex`, `chartData`, `apOnly`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDraft {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub steps: Vec<String>,
    pub question: String,
    pub choices: Vec<String>,
    #[serde(alias = "correctIndex")]
    pub correct_index: usize,
    #[serde(default)]
    pub hint: String,
    #[serde(default)]
    pub links: Vec<LinkDraft>,
    #[serde(default, alias = "chartData")]
    pub chart_data: Vec<f64>,
    #[serde(default, alias = "apOnly")]
    pub ap_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDraft {
    pub text: String,
    pub href: String,
}

impl LessonDraft {
    /// Validate the draft into an immutable `Lesson`.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` when the id or title is blank, there are no choices,
    /// the correct index is out of range, a link is not an absolute URL, or the
    /// chart series does not line up with the fixed axis.
    pub fn validate(self) -> Result<Lesson, LessonError> {
        let id = LessonId::new(self.id).map_err(|_| LessonError::BlankId)?;

        if self.title.trim().is_empty() {
            return Err(LessonError::EmptyTitle(id));
        }
        if self.choices.is_empty() {
            return Err(LessonError::NoChoices(id));
        }
        if self.correct_index >= self.choices.len() {
            return Err(LessonError::CorrectIndexOutOfRange {
                id,
                index: self.correct_index,
                len: self.choices.len(),
            });
        }
        if !self.chart_data.is_empty() && self.chart_data.len() != CHART_LABELS.len() {
            return Err(LessonError::ChartLength {
                id,
                len: self.chart_data.len(),
                expected: CHART_LABELS.len(),
            });
        }

        let mut links = Vec::with_capacity(self.links.len());
        for link in self.links {
            let absolute = Url::parse(&link.href).is_ok_and(|url| !url.cannot_be_a_base());
            if !absolute {
                return Err(LessonError::InvalidLink {
                    id,
                    href: link.href,
                });
            }
            links.push(LessonLink {
                text: link.text,
                href: link.href,
            });
        }

        Ok(Lesson {
            id,
            title: self.title,
            summary: self.summary,
            steps: self.steps,
            question: self.question,
            choices: self.choices,
            correct_index: self.correct_index,
            hint: self.hint,
            links,
            chart_data: self.chart_data,
            ap_only: self.ap_only,
        })
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A reference link shown under a lesson. `href` is checked to be an
/// absolute URL but kept exactly as the author wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonLink {
    text: String,
    href: String,
}

impl LessonLink {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }
}

/// A validated lesson. `correct_index` always points into `choices`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    summary: String,
    steps: Vec<String>,
    question: String,
    choices: Vec<String>,
    correct_index: usize,
    hint: String,
    links: Vec<LessonLink>,
    chart_data: Vec<f64>,
    ap_only: bool,
}

impl Lesson {
    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_choice(&self) -> &str {
        &self.choices[self.correct_index]
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn links(&self) -> &[LessonLink] {
        &self.links
    }

    #[must_use]
    pub fn chart_data(&self) -> &[f64] {
        &self.chart_data
    }

    #[must_use]
    pub fn is_ap_only(&self) -> bool {
        self.ap_only
    }

    /// Grade a choice. Returns `None` if `index` is not one of the choices.
    #[must_use]
    pub fn check_choice(&self, index: usize) -> Option<QuizFeedback> {
        if index >= self.choices.len() {
            return None;
        }
        if index == self.correct_index {
            Some(QuizFeedback::Correct(self.correct_choice().to_string()))
        } else {
            Some(QuizFeedback::TryAgain)
        }
    }
}

//
// ─── LESSON VALIDATION ERRORS ──────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson id cannot be blank")]
    BlankId,

    #[error("lesson {0} has an empty title")]
    EmptyTitle(LessonId),

    #[error("lesson {0} needs at least one choice")]
    NoChoices(LessonId),

    #[error("lesson {id}: correct index {index} is out of range for {len} choices")]
    CorrectIndexOutOfRange {
        id: LessonId,
        index: usize,
        len: usize,
    },

    #[error("lesson {id}: link {href:?} is not an absolute URL")]
    InvalidLink { id: LessonId, href: String },

    #[error("lesson {id}: chart has {len} points, expected {expected}")]
    ChartLength {
        id: LessonId,
        len: usize,
        expected: usize,
    },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> LessonDraft {
        LessonDraft {
            id: "cell-structure".into(),
            title: "Cell Structure (Biology)".into(),
            summary: String::new(),
            steps: vec!["Cells are the smallest unit of life.".into()],
            question: "What is the powerhouse of the cell?".into(),
            choices: vec!["Nucleus".into(), "Mitochondrion".into()],
            correct_index: 1,
            hint: "It produces ATP.".into(),
            links: vec![LinkDraft {
                text: "NCBI".into(),
                href: "https://www.ncbi.nlm.nih.gov/".into(),
            }],
            chart_data: vec![0.0, 1.0, 3.0, 2.0, 5.0],
            ap_only: false,
        }
    }

    #[test]
    fn valid_draft_validates() {
        let lesson = draft().validate().unwrap();
        assert_eq!(lesson.id().as_str(), "cell-structure");
        assert_eq!(lesson.correct_choice(), "Mitochondrion");
        assert_eq!(lesson.links()[0].href(), "https://www.ncbi.nlm.nih.gov/");
    }

    #[test]
    fn blank_id_fails() {
        let mut d = draft();
        d.id = "  ".into();
        assert_eq!(d.validate().unwrap_err(), LessonError::BlankId);
    }

    #[test]
    fn no_choices_fails() {
        let mut d = draft();
        d.choices.clear();
        d.correct_index = 0;
        assert!(matches!(d.validate().unwrap_err(), LessonError::NoChoices(_)));
    }

    #[test]
    fn correct_index_out_of_range_fails() {
        let mut d = draft();
        d.correct_index = 2;
        let err = d.validate().unwrap_err();
        assert!(matches!(
            err,
            LessonError::CorrectIndexOutOfRange { index: 2, len: 2, .. }
        ));
    }

    #[test]
    fn relative_link_fails() {
        let mut d = draft();
        d.links[0].href = "/relative/path".into();
        assert!(matches!(d.validate().unwrap_err(), LessonError::InvalidLink { .. }));
    }

    #[test]
    fn link_href_keeps_author_text() {
        let mut d = draft();
        d.links[0].href = "https://scholar.google.com".into();
        let lesson = d.validate().unwrap();
        assert_eq!(lesson.links()[0].href(), "https://scholar.google.com");
    }

    #[test]
    fn chart_length_must_match_axis() {
        let mut d = draft();
        d.chart_data = vec![1.0, 2.0, 3.0];
        assert!(matches!(
            d.validate().unwrap_err(),
            LessonError::ChartLength { len: 3, expected: 5, .. }
        ));
    }

    #[test]
    fn empty_chart_is_allowed() {
        let mut d = draft();
        d.chart_data.clear();
        let lesson = d.validate().unwrap();
        assert!(lesson.chart_data().is_empty());
    }

    #[test]
    fn check_choice_grades_each_index() {
        let lesson = draft().validate().unwrap();
        assert_eq!(
            lesson.check_choice(1),
            Some(QuizFeedback::Correct("Mitochondrion".into()))
        );
        assert_eq!(lesson.check_choice(0), Some(QuizFeedback::TryAgain));
        assert_eq!(lesson.check_choice(7), None);
    }

    #[test]
    fn camel_case_keys_deserialize() {
        let json = r#"{
            "id": "x",
            "title": "X",
            "question": "Q?",
            "choices": ["a", "b"],
            "correctIndex": 0,
            "chartData": [1, 2, 3, 4, 5],
            "apOnly": true
        }"#;
        let d: LessonDraft = serde_json::from_str(json).unwrap();
        assert_eq!(d.correct_index, 0);
        assert!(d.ap_only);
        assert_eq!(d.chart_data.len(), 5);
    }
}
