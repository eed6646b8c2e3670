mod app;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::{BrieflyApp, run};
pub use message::Message;
pub use state::AppState;
