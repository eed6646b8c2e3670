use crate::core::{store::BriefStore, tagline::TaglineClient};

/// Shared handles every screen works against. Both are cheap clones
/// (`Arc`-backed store, shared `reqwest` client) so async tasks can
/// take their own copies.
#[derive(Debug)]
pub struct AppState {
    pub store: BriefStore,
    pub tagline: TaglineClient,
}
