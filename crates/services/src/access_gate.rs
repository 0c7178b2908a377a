use lesson_core::{AccessState, IdentityUser};
use serde::Deserialize;
use tracing::info;

/// Events published by the identity widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityEvent {
    Init(Option<IdentityUser>),
    Login(Option<IdentityUser>),
    Logout,
}

/// Wire shape forwarded by the page bridge:
/// `{ "event": "init" | "login" | "logout", "user": {...} | null }`.
#[derive(Debug, Deserialize)]
struct IdentityEventMessage {
    event: String,
    #[serde(default)]
    user: Option<IdentityUser>,
}

impl IdentityEvent {
    /// Decode one bridge message. Unknown event names yield `None`.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the message is not valid JSON.
    pub fn from_json(value: serde_json::Value) -> Result<Option<Self>, serde_json::Error> {
        let msg: IdentityEventMessage = serde_json::from_value(value)?;
        Ok(match msg.event.as_str() {
            "init" => Some(Self::Init(msg.user)),
            "login" => Some(Self::Login(msg.user)),
            "logout" => Some(Self::Logout),
            _ => None,
        })
    }
}

pub type IdentityListener = Box<dyn FnMut(IdentityEvent)>;

/// The third-party identity widget.
pub trait IdentityProvider {
    /// Register the single listener for `init`/`login`/`logout` events.
    fn subscribe(&self, listener: IdentityListener);
    fn init(&self);
    fn open(&self);
    fn close(&self);
    fn logout(&self);
}

/// Maps identity events onto control and AP-section visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessGate {
    state: AccessState,
}

impl AccessGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: &IdentityEvent, provider: &dyn IdentityProvider) -> AccessState {
        match event {
            IdentityEvent::Init(user) => self.update_access(user.as_ref()),
            IdentityEvent::Login(user) => {
                provider.close();
                self.update_access(user.as_ref())
            }
            IdentityEvent::Logout => self.update_access(None),
        }
    }

    pub fn update_access(&mut self, user: Option<&IdentityUser>) -> AccessState {
        let next = AccessState::for_user(user);
        if next != self.state {
            info!(
                signed_in = user.is_some(),
                ap = next.ap_visible,
                "access updated"
            );
        }
        self.state = next;
        next
    }
}

/// Subscribe a fresh gate to `provider` and start the widget.
///
/// `on_change` receives the access state after every event.
pub fn connect<P, F>(provider: &P, mut on_change: F)
where
    P: IdentityProvider + Clone + 'static,
    F: FnMut(AccessState) + 'static,
{
    let mut gate = AccessGate::new();
    let widget = provider.clone();
    provider.subscribe(Box::new(move |event| {
        let state = gate.handle(&event, &widget);
        on_change(state);
    }));
    provider.init();
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct FakeWidget {
        calls: Rc<RefCell<Vec<&'static str>>>,
        listener: Rc<RefCell<Option<IdentityListener>>>,
    }

    impl FakeWidget {
        fn emit(&self, event: IdentityEvent) {
            if let Some(listener) = self.listener.borrow_mut().as_mut() {
                listener(event);
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }
    }

    impl IdentityProvider for FakeWidget {
        fn subscribe(&self, listener: IdentityListener) {
            *self.listener.borrow_mut() = Some(listener);
        }

        fn init(&self) {
            self.calls.borrow_mut().push("init");
        }

        fn open(&self) {
            self.calls.borrow_mut().push("open");
        }

        fn close(&self) {
            self.calls.borrow_mut().push("close");
        }

        fn logout(&self) {
            self.calls.borrow_mut().push("logout");
        }
    }

    fn ap_user() -> IdentityUser {
        IdentityUser::with_roles(["AP"])
    }

    #[test]
    fn login_closes_widget_and_unlocks_ap() {
        let widget = FakeWidget::default();
        let mut gate = AccessGate::new();

        let state = gate.handle(&IdentityEvent::Login(Some(ap_user())), &widget);
        assert!(state.ap_visible);
        assert!(!state.login_visible);
        assert_eq!(widget.calls(), vec!["close"]);
    }

    #[test]
    fn init_without_user_keeps_defaults() {
        let widget = FakeWidget::default();
        let mut gate = AccessGate::new();

        let state = gate.handle(&IdentityEvent::Init(None), &widget);
        assert_eq!(state, AccessState::default());
        assert!(widget.calls().is_empty());
    }

    #[test]
    fn logout_locks_again() {
        let widget = FakeWidget::default();
        let mut gate = AccessGate::new();
        gate.handle(&IdentityEvent::Init(Some(ap_user())), &widget);

        let state = gate.handle(&IdentityEvent::Logout, &widget);
        assert!(state.ap_hidden());
        assert!(state.login_visible);
        assert!(!state.logout_visible);
    }

    #[test]
    fn repeated_events_are_idempotent() {
        let widget = FakeWidget::default();
        let mut gate = AccessGate::new();
        let user = IdentityUser::with_roles(["student"]);

        let first = gate.handle(&IdentityEvent::Init(Some(user.clone())), &widget);
        let second = gate.handle(&IdentityEvent::Init(Some(user)), &widget);
        assert_eq!(first, second);
        assert!(first.ap_hidden());
    }

    #[test]
    fn connect_subscribes_then_inits() {
        let widget = FakeWidget::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        connect(&widget, move |state| sink.borrow_mut().push(state));
        assert_eq!(widget.calls(), vec!["init"]);

        widget.emit(IdentityEvent::Login(Some(ap_user())));
        widget.emit(IdentityEvent::Logout);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].ap_visible);
        assert!(!seen[1].ap_visible);
        assert_eq!(widget.calls(), vec!["init", "close"]);
    }

    #[test]
    fn bridge_messages_decode() {
        let login = IdentityEvent::from_json(serde_json::json!({
            "event": "login",
            "user": { "app_metadata": { "roles": ["AP"] } }
        }))
        .unwrap();
        assert_eq!(login, Some(IdentityEvent::Login(Some(ap_user()))));

        let logout = IdentityEvent::from_json(serde_json::json!({ "event": "logout" })).unwrap();
        assert_eq!(logout, Some(IdentityEvent::Logout));

        let init = IdentityEvent::from_json(serde_json::json!({ "event": "init", "user": null }))
            .unwrap();
        assert_eq!(init, Some(IdentityEvent::Init(None)));

        let other = IdentityEvent::from_json(serde_json::json!({ "event": "error" })).unwrap();
        assert_eq!(other, None);
    }
}
