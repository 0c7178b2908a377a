use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use lesson_core::model::LessonId;
use lesson_core::{AccessState, Catalog, IdentityUser};
use services::ViewerConfig;

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, TopicGrid};
use crate::vm::map_topic_cards;

struct TestApp {
    catalog: Arc<Catalog>,
    initial_lesson: Option<LessonId>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn config(&self) -> ViewerConfig {
        // Keep deferred chart renders and the identity bridge out of the way.
        ViewerConfig {
            chart_delay: Duration::from_secs(3600),
            catalog_path: None,
            identity_enabled: false,
        }
    }

    fn initial_lesson(&self) -> Option<LessonId> {
        self.initial_lesson.clone()
    }
}

#[derive(Props, Clone)]
struct HomeHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HomeHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HomeHarness(props: HomeHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { HomeView {} }
}

#[component]
fn GridHarness(query: String, ap: bool) -> Element {
    let cards = map_topic_cards(&Catalog::builtin().unwrap());
    let access = if ap {
        AccessState::for_user(Some(&IdentityUser::with_roles(["AP"])))
    } else {
        AccessState::default()
    };
    rsx! {
        TopicGrid { cards, query, access, on_open: |_| {} }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_home_harness(initial_lesson: Option<&str>) -> ViewHarness {
    let app = Arc::new(TestApp {
        catalog: Arc::new(Catalog::builtin().unwrap()),
        initial_lesson: initial_lesson.map(|raw| LessonId::new(raw).unwrap()),
    });
    let dom = VirtualDom::new_with_props(HomeHarness, HomeHarnessProps { app });
    ViewHarness { dom }
}

pub fn setup_grid_harness(query: &str, ap: bool) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        GridHarness,
        GridHarnessProps {
            query: query.to_string(),
            ap,
        },
    );
    ViewHarness { dom }
}
