pub mod core;

pub use self::core::store::{Brief, BriefRepository, BriefStore, NewBrief};
pub use self::core::submission::{parse_deadline, submit_brief, today};
pub use self::core::tagline::{
    EMPTY_TAGLINE_PLACEHOLDER, TaglineClient, TaglineConfig, TaglineError, TaglineGenerator,
    tagline_or_placeholder,
};

#[cfg(feature = "gui")]
pub mod gui;
