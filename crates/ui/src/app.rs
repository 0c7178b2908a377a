use dioxus::prelude::*;

use crate::bridge::{CHART_JS_SRC, IDENTITY_WIDGET_SRC};
use crate::views::HomeView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Lessons" }

        // Third-party libraries; the page degrades silently if either fails to load.
        document::Script { src: CHART_JS_SRC }
        document::Script { src: IDENTITY_WIDGET_SRC }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                HomeView {}
            }
        }
    }
}
