use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use time::Date;

/// A single submitted project brief. Records are immutable after
/// submission; the only destruction path is the global clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brief {
    pub project_name: String,
    /// Stored as `YYYY-MM-DD`.
    pub deadline: Date,
    pub links: String,
    /// Original filenames of attachments, flat-namespaced in the
    /// upload directory. Colliding names silently overwrite.
    pub files: Vec<String>,
    /// Generated tagline, or a placeholder string when generation
    /// failed or came back empty. Never an empty string.
    pub tagline: String,
}

/// Form input for a submission, before uploads are copied and the
/// tagline is generated.
#[derive(Debug, Clone)]
pub struct NewBrief {
    pub project_name: String,
    pub deadline: Date,
    pub links: String,
    /// Paths of files picked by the user, copied into the upload
    /// directory at submission time.
    pub attachments: Vec<PathBuf>,
}
