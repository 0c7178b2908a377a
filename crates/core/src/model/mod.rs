mod ids;
mod lesson;

pub use ids::{LessonId, ParseIdError};
pub use lesson::{Lesson, LessonDraft, LessonError, LessonLink, LinkDraft};
