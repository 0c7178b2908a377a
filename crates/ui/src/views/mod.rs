mod auth;
mod home;
mod lesson;
mod topics;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use auth::{ApSection, AuthBar};
pub use home::HomeView;
pub use lesson::LessonDetail;
pub use topics::TopicGrid;
