use std::time::Duration;

use dioxus::core::Task;
use dioxus::document::eval;
use dioxus::prelude::*;
use lesson_core::model::LessonId;
use lesson_core::{AccessState, ChartSeries};
use services::{ChartController, IdentityProvider, LessonSession, LessonView, connect};
use tracing::debug;

use crate::bridge::{ChartJsSurface, NetlifyIdentity, scroll_into_view_script};
use crate::context::AppContext;
use crate::views::{ApSection, AuthBar, LessonDetail, TopicGrid};
use crate::vm::map_topic_cards;

const LESSON_SECTION_ID: &str = "lesson";

/// Draw the chart once the detail view has had `delay` to lay out.
///
/// The returned task is cancelled when the next lesson opens; the render
/// ticket catches anything that slips through.
fn spawn_chart_render(
    mut charts: CopyValue<ChartController>,
    series: ChartSeries,
    delay: Duration,
) -> Task {
    spawn(async move {
        let ticket = charts.write().schedule(series);
        tokio::time::sleep(delay).await;
        let surface = ChartJsSurface::probe().await;
        let outcome = charts.write().render(ticket, &surface);
        debug!(?outcome, "chart render finished");
    })
}

/// Signal handles behind the lesson detail. Every handler copies one.
#[derive(Clone, Copy)]
struct LessonControls {
    session: Signal<LessonSession>,
    lesson: Signal<Option<LessonView>>,
    charts: CopyValue<ChartController>,
    chart_task: CopyValue<Option<Task>>,
    scroll_requests: Signal<u32>,
    chart_delay: Duration,
}

impl LessonControls {
    fn new(session: LessonSession, chart_delay: Duration) -> Self {
        Self {
            session: Signal::new(session),
            lesson: Signal::new(None),
            charts: CopyValue::new(ChartController::new()),
            chart_task: CopyValue::new(None),
            scroll_requests: Signal::new(0),
            chart_delay,
        }
    }

    /// Show `id`, redraw its chart after the delay, and scroll to it.
    /// Unknown ids leave everything as it was.
    fn open(mut self, id: &LessonId) {
        let view = match self.session.write().open_lesson(id) {
            Ok(view) => view,
            Err(err) => {
                debug!(error = %err, "open ignored");
                return;
            }
        };
        self.cancel_chart_task();
        self.chart_task.set(Some(spawn_chart_render(
            self.charts,
            view.chart.clone(),
            self.chart_delay,
        )));
        self.lesson.set(Some(view));
        *self.scroll_requests.write() += 1;
    }

    fn close(mut self) {
        self.session.write().close();
        self.cancel_chart_task();
        self.charts.write().cancel();
    }

    /// Release the live chart when the page goes away.
    fn dispose_chart(mut self) {
        if let Ok(mut charts) = self.charts.try_write() {
            charts.clear();
        }
    }

    fn cancel_chart_task(mut self) {
        if let Some(task) = self.chart_task.write().take() {
            task.cancel();
        }
    }
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let identity_enabled = ctx.identity_enabled();
    let cards = use_hook(|| map_topic_cards(&ctx.catalog()));

    let mut search = use_signal(String::new);
    let mut access = use_signal(AccessState::default);
    let controls =
        use_hook(|| LessonControls::new(LessonSession::new(ctx.catalog()), ctx.chart_delay()));
    let LessonControls {
        mut session,
        lesson,
        scroll_requests,
        ..
    } = controls;

    // A deep-linked lesson opens the same way a card's button does.
    use_hook(|| {
        if let Some(id) = ctx.initial_lesson() {
            controls.open(&id);
        }
    });

    let identity = use_hook(move || {
        if !identity_enabled {
            return None;
        }
        let widget = NetlifyIdentity::new();
        connect(&widget, move |state| access.set(state));
        Some(widget)
    });

    use_effect(move || {
        if scroll_requests() > 0 {
            let _ = eval(&scroll_into_view_script(LESSON_SECTION_ID));
        }
    });

    use_drop(move || controls.dispose_chart());

    let open_lesson = use_callback(move |id: LessonId| controls.open(&id));

    let (detail_visible, hint_visible, answer) = {
        let state = session.read();
        (
            state.detail_visible(),
            state.hint_visible(),
            state.answer().clone(),
        )
    };
    let detail = lesson.read().clone();
    let login_widget = identity.clone();
    let logout_widget = identity;

    rsx! {
        div { class: "page lessons-page",
            header { class: "view-header",
                div {
                    h1 { class: "view-title", "Lessons" }
                    p { class: "view-subtitle", "Pick a topic, work through the steps, then try the quiz." }
                }
                AuthBar {
                    access: access(),
                    on_login: move |_| {
                        if let Some(widget) = login_widget.as_ref() {
                            widget.open();
                        }
                    },
                    on_logout: move |_| {
                        if let Some(widget) = logout_widget.as_ref() {
                            widget.logout();
                        }
                    },
                }
            }
            div { class: "view-divider" }
            div { class: "topic-search",
                input {
                    id: "search",
                    class: "topic-search-input",
                    r#type: "search",
                    placeholder: "Search topics...",
                    value: "{search()}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }
            TopicGrid {
                cards: cards.clone(),
                query: search(),
                access: access(),
                on_open: move |id| open_lesson.call(id),
            }
            ApSection { access: access() }
            if let Some(view) = detail {
                LessonDetail {
                    view,
                    visible: detail_visible,
                    hint_visible,
                    answer,
                    on_choose: move |index| {
                        if let Err(err) = session.write().choose(index) {
                            debug!(error = %err, "choice ignored");
                        }
                    },
                    on_hint: move |_| session.write().show_hint(),
                    on_answer: move |_| {
                        if let Err(err) = session.write().show_answer() {
                            debug!(error = %err, "answer ignored");
                        }
                    },
                    on_close: move |_| controls.close(),
                }
            }
        }
    }
}
