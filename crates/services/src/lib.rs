#![forbid(unsafe_code)]

pub mod access_gate;
pub mod chart_controller;
pub mod config;
pub mod error;
pub mod sessions;

pub use access_gate::{AccessGate, IdentityEvent, IdentityListener, IdentityProvider, connect};
pub use chart_controller::{ChartController, ChartHandle, ChartSurface, RenderOutcome, RenderTicket};
pub use config::ViewerConfig;
pub use error::{ChartError, ConfigError, SessionError};
pub use sessions::{AnswerPanel, LessonSession, LessonView, LinkView};
