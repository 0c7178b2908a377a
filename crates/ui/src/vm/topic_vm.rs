use lesson_core::model::{Lesson, LessonId};
use lesson_core::{AccessState, Catalog, SearchQuery, Searchable};

/// A topic card on the landing grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub id: LessonId,
    pub title: String,
    pub summary: String,
    pub ap_only: bool,
}

impl TopicCardVm {
    #[must_use]
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id().clone(),
            title: lesson.title().to_string(),
            summary: lesson.summary().to_string(),
            ap_only: lesson.is_ap_only(),
        }
    }

    /// Shown when it matches the query and, for AP-only cards, access allows it.
    #[must_use]
    pub fn is_visible(&self, query: &SearchQuery, access: AccessState) -> bool {
        query.matches_card(self) && (!self.ap_only || access.ap_visible)
    }
}

impl Searchable for TopicCardVm {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.summary
    }
}

#[must_use]
pub fn map_topic_cards(catalog: &Catalog) -> Vec<TopicCardVm> {
    catalog.iter().map(TopicCardVm::from_lesson).collect()
}
