use dioxus::prelude::*;
use lesson_core::AccessState;

#[component]
pub fn AuthBar(access: AccessState, on_login: EventHandler<()>, on_logout: EventHandler<()>) -> Element {
    rsx! {
        div { class: "auth-bar",
            button {
                id: "loginBtn",
                class: "btn btn-secondary",
                r#type: "button",
                hidden: !access.login_visible,
                onclick: move |_| on_login.call(()),
                "Log in"
            }
            button {
                id: "logoutBtn",
                class: "btn btn-secondary",
                r#type: "button",
                hidden: !access.logout_visible,
                onclick: move |_| on_logout.call(()),
                "Log out"
            }
        }
    }
}

/// Page section only AP students may see.
#[component]
pub fn ApSection(access: AccessState) -> Element {
    rsx! {
        section { class: "ap-only ap-section", hidden: access.ap_hidden(),
            h2 { "AP Exam Practice" }
            p { "Timed free-response drills and past-exam walkthroughs for enrolled AP students." }
        }
    }
}
