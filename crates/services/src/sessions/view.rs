use lesson_core::ChartSeries;
use lesson_core::model::{Lesson, LessonId};

/// A reference link as the detail view renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub text: String,
    pub href: String,
}

/// Everything the detail view needs to rebuild itself for one lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonView {
    pub id: LessonId,
    pub title: String,
    pub steps: Vec<String>,
    pub question: String,
    pub choices: Vec<String>,
    pub hint: String,
    pub links: Vec<LinkView>,
    pub chart: ChartSeries,
}

impl LessonView {
    #[must_use]
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id().clone(),
            title: lesson.title().to_string(),
            steps: lesson.steps().to_vec(),
            question: lesson.question().to_string(),
            choices: lesson.choices().to_vec(),
            hint: lesson.hint().to_string(),
            links: lesson
                .links()
                .iter()
                .map(|link| LinkView {
                    text: link.text().to_string(),
                    href: link.href().to_string(),
                })
                .collect(),
            chart: ChartSeries::for_lesson(lesson),
        }
    }
}
