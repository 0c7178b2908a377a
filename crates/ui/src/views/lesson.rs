use dioxus::prelude::*;
use services::{AnswerPanel, LessonView};

use crate::bridge::CHART_CANVAS_ID;

#[component]
pub fn LessonDetail(
    view: LessonView,
    visible: bool,
    hint_visible: bool,
    answer: AnswerPanel,
    on_choose: EventHandler<usize>,
    on_hint: EventHandler<()>,
    on_answer: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let steps = view.steps.iter().enumerate().map(|(pos, step)| {
        rsx! {
            li { key: "{pos}", "{step}" }
        }
    });
    let choices = view.choices.iter().enumerate().map(|(index, choice)| {
        rsx! {
            button {
                key: "{index}",
                class: "smallBtn",
                r#type: "button",
                onclick: move |_| on_choose.call(index),
                "{choice}"
            }
        }
    });
    let links = view.links.iter().enumerate().map(|(pos, link)| {
        rsx! {
            li { key: "{pos}",
                a { href: "{link.href}", target: "_blank", rel: "noopener", "{link.text}" }
            }
        }
    });

    rsx! {
        section { id: "lesson", class: "lesson", hidden: !visible,
            header { class: "view-header",
                h2 { id: "lessonTitle", class: "view-title", "{view.title}" }
                button {
                    id: "closeLesson",
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
            ol { id: "stepsList", {steps} }
            div { class: "lesson-quiz",
                p { id: "questionText", "{view.question}" }
                div { id: "choices", {choices} }
                div { class: "lesson-reveal",
                    button {
                        id: "showHint",
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_hint.call(()),
                        "Show hint"
                    }
                    button {
                        id: "showAnswer",
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_answer.call(()),
                        "Show answer"
                    }
                }
                div { id: "hint", class: "lesson-hint", hidden: !hint_visible, "{view.hint}" }
                div { id: "answer", class: "lesson-answer", hidden: !answer.visible, "{answer.text}" }
            }
            div { class: "lesson-chart",
                canvas { id: CHART_CANVAS_ID }
            }
            h3 { "Further reading" }
            ul { id: "linksList", {links} }
        }
    }
}
