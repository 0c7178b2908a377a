use dioxus::prelude::*;
use lesson_core::model::LessonId;
use lesson_core::{AccessState, SearchQuery};

use crate::vm::TopicCardVm;

#[component]
pub fn TopicGrid(
    cards: Vec<TopicCardVm>,
    query: String,
    access: AccessState,
    on_open: EventHandler<LessonId>,
) -> Element {
    let query = SearchQuery::new(&query);
    let visible = cards
        .iter()
        .map(|card| card.is_visible(&query, access))
        .collect::<Vec<_>>();
    let any_visible = visible.iter().any(|shown| *shown);

    let items = cards.into_iter().zip(visible).map(|(card, shown)| {
        let id = card.id.clone();
        let class = if card.ap_only {
            "topic-card ap-only"
        } else {
            "topic-card"
        };
        rsx! {
            article { key: "{card.id}", class: "{class}", hidden: !shown,
                h2 { "{card.title}" }
                p { "{card.summary}" }
                button {
                    class: "btn btn-primary open-lesson",
                    r#type: "button",
                    "data-lesson": "{card.id}",
                    onclick: move |_| on_open.call(id.clone()),
                    "Open lesson"
                }
            }
        }
    });

    rsx! {
        div { class: "topic-grid",
            {items}
        }
        if !any_visible {
            p { class: "topic-empty", "No topics match that search." }
        }
    }
}
