mod service;
mod view;

pub use service::{AnswerPanel, LessonSession};
pub use view::{LessonView, LinkView};
