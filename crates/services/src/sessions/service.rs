use std::sync::Arc;

use lesson_core::model::{Lesson, LessonId};
use lesson_core::quiz::answer_reveal;
use lesson_core::{Catalog, QuizFeedback};
use tracing::debug;

use super::view::LessonView;
use crate::error::SessionError;

//
// ─── ANSWER PANEL ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerPanel {
    pub visible: bool,
    pub text: String,
}

impl AnswerPanel {
    fn show(&mut self, text: String) {
        self.visible = true;
        self.text = text;
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Transient state of the lesson detail view.
///
/// Tracks the open lesson by id; the answer control never has to guess which
/// lesson is on screen.
pub struct LessonSession {
    catalog: Arc<Catalog>,
    open: Option<LessonId>,
    detail_visible: bool,
    hint_visible: bool,
    answer: AnswerPanel,
}

impl LessonSession {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            open: None,
            detail_visible: false,
            hint_visible: false,
            answer: AnswerPanel::default(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn open_id(&self) -> Option<&LessonId> {
        self.open.as_ref()
    }

    #[must_use]
    pub fn current_lesson(&self) -> Option<&Lesson> {
        self.open.as_ref().and_then(|id| self.catalog.get(id))
    }

    #[must_use]
    pub fn detail_visible(&self) -> bool {
        self.detail_visible
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    #[must_use]
    pub fn answer(&self) -> &AnswerPanel {
        &self.answer
    }

    /// Open a lesson and reset every sub-panel to its fresh state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownLesson` if the id is not in the catalog;
    /// the session is left untouched in that case.
    pub fn open_lesson(&mut self, id: &LessonId) -> Result<LessonView, SessionError> {
        let Some(lesson) = self.catalog.get(id) else {
            debug!(lesson = %id, "open ignored: unknown lesson");
            return Err(SessionError::UnknownLesson(id.to_string()));
        };
        let view = LessonView::from_lesson(lesson);

        self.open = Some(id.clone());
        self.detail_visible = true;
        self.hint_visible = false;
        self.answer = AnswerPanel::default();
        debug!(lesson = %id, "lesson opened");
        Ok(view)
    }

    /// Like `open_lesson`, for the raw key carried by an "open" control.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownLesson` for blank or unknown keys.
    pub fn open_lesson_str(&mut self, id: &str) -> Result<LessonView, SessionError> {
        let parsed = id
            .parse::<LessonId>()
            .map_err(|_| SessionError::UnknownLesson(id.to_string()))?;
        self.open_lesson(&parsed)
    }

    /// Grade a choice of the open lesson and show the feedback.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoLessonOpen` when nothing is open and
    /// `SessionError::ChoiceOutOfRange` for an index past the last choice.
    pub fn choose(&mut self, index: usize) -> Result<QuizFeedback, SessionError> {
        let lesson = self.current_lesson().ok_or(SessionError::NoLessonOpen)?;
        let feedback = lesson
            .check_choice(index)
            .ok_or(SessionError::ChoiceOutOfRange {
                index,
                len: lesson.choices().len(),
            })?;
        self.answer.show(feedback.message());
        Ok(feedback)
    }

    pub fn show_hint(&mut self) {
        self.hint_visible = true;
    }

    /// Reveal the official answer of the open lesson.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoLessonOpen` when nothing is open.
    pub fn show_answer(&mut self) -> Result<&AnswerPanel, SessionError> {
        let lesson = self.current_lesson().ok_or(SessionError::NoLessonOpen)?;
        let text = answer_reveal(lesson);
        self.answer.show(text);
        Ok(&self.answer)
    }

    pub fn close(&mut self) {
        self.detail_visible = false;
        self.open = None;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
