use std::cell::RefCell;
use std::rc::Rc;

use dioxus::document::eval;
use dioxus::prelude::spawn;
use services::{IdentityEvent, IdentityListener, IdentityProvider};
use tracing::{debug, warn};

use super::wait_for_global_js;

/// Subscribes to the widget and forwards each event as
/// `{ event, user: { app_metadata: { roles } } | null }`. Runs after
/// `waitForGlobal` is defined.
const IDENTITY_SUBSCRIBE_SCRIPT: &str = r#"
    const widget = await waitForGlobal("netlifyIdentity");
    if (!widget) {
        dioxus.send({ event: "unavailable", user: null });
        return;
    }
    const project = (user) => user ? {
        app_metadata: { roles: (user.app_metadata && user.app_metadata.roles) || [] },
    } : null;
    widget.on("init", (user) => dioxus.send({ event: "init", user: project(user) }));
    widget.on("login", (user) => dioxus.send({ event: "login", user: project(user) }));
    widget.on("logout", () => dioxus.send({ event: "logout", user: null }));
    widget.init();
    await new Promise(() => {});
"#;

fn identity_bridge_script() -> String {
    format!("{}\n{IDENTITY_SUBSCRIBE_SCRIPT}", wait_for_global_js())
}

fn widget_call_script(method: &str) -> String {
    format!(
        r#"if (window.netlifyIdentity) {{ window.netlifyIdentity.{method}(); }}"#
    )
}

/// The Netlify Identity widget loaded by the page.
#[derive(Clone, Default)]
pub struct NetlifyIdentity {
    listener: Rc<RefCell<Option<IdentityListener>>>,
}

impl NetlifyIdentity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn dispatch(&self, event: IdentityEvent) {
        if let Some(listener) = self.listener.borrow_mut().as_mut() {
            listener(event);
        }
    }
}

impl IdentityProvider for NetlifyIdentity {
    fn subscribe(&self, listener: IdentityListener) {
        *self.listener.borrow_mut() = Some(listener);
    }

    fn init(&self) {
        let widget = self.clone();
        spawn(async move {
            let mut bridge = eval(&identity_bridge_script());
            loop {
                let message = match bridge.recv::<serde_json::Value>().await {
                    Ok(message) => message,
                    Err(err) => {
                        debug!(error = ?err, "identity bridge closed");
                        break;
                    }
                };
                match IdentityEvent::from_json(message) {
                    Ok(Some(event)) => widget.dispatch(event),
                    Ok(None) => debug!("identity widget not loaded; access stays locked"),
                    Err(err) => warn!(error = %err, "malformed identity event"),
                }
            }
        });
    }

    fn open(&self) {
        let _ = eval(&widget_call_script("open"));
    }

    fn close(&self) {
        let _ = eval(&widget_call_script("close"));
    }

    fn logout(&self) {
        let _ = eval(&widget_call_script("logout"));
    }
}
