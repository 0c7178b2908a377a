use std::sync::Arc;
use std::time::Duration;

use lesson_core::Catalog;
use lesson_core::model::LessonId;
use services::ViewerConfig;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn config(&self) -> ViewerConfig;

    /// Lesson to open on launch, if any.
    fn initial_lesson(&self) -> Option<LessonId> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    chart_delay: Duration,
    identity_enabled: bool,
    initial_lesson: Option<LessonId>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let config = app.config();
        Self {
            catalog: app.catalog(),
            chart_delay: config.chart_delay,
            identity_enabled: config.identity_enabled,
            initial_lesson: app.initial_lesson(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn chart_delay(&self) -> Duration {
        self.chart_delay
    }

    #[must_use]
    pub fn identity_enabled(&self) -> bool {
        self.identity_enabled
    }

    #[must_use]
    pub fn initial_lesson(&self) -> Option<LessonId> {
        self.initial_lesson.clone()
    }
}

/// Snapshot the binary's catalog and config for `use_context`.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
