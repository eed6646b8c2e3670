use std::path::{Path, PathBuf};

use briefly::{BriefStore, NewBrief, TaglineError, TaglineGenerator};
use tempfile::TempDir;
use time::macros::date;

/// A deadline far enough in the future for every test.
pub const TEST_DEADLINE: time::Date = date!(2030 - 01 - 01);

/// Creates a BriefStore in a temporary sandbox.
/// Returns both the store and the temp directory (which must be kept alive).
pub fn create_test_store() -> (BriefStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let store = BriefStore::open(dir.path().join("briefs.json"), dir.path().join("uploads"))
        .expect("Failed to open test store");
    (store, dir)
}

/// A minimal form input with no links and no attachments.
pub fn make_new_brief(name: &str) -> NewBrief {
    NewBrief {
        project_name: name.to_string(),
        deadline: TEST_DEADLINE,
        links: String::new(),
        attachments: Vec::new(),
    }
}

/// Writes an attachment fixture into `dir` and returns its path.
pub fn write_attachment(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Failed to write attachment fixture");
    path
}

/// Generator double returning a fixed tagline.
#[derive(Debug, Clone)]
pub struct FixedTagline(pub &'static str);

impl TaglineGenerator for FixedTagline {
    fn generate_tagline(
        &self,
        _project_name: &str,
    ) -> impl Future<Output = Result<String, TaglineError>> + Send {
        let tagline = self.0.to_string();
        async move { Ok(tagline) }
    }
}

/// Generator double that always fails like an unreachable backend.
#[derive(Debug, Clone)]
pub struct FailingTagline;

impl TaglineGenerator for FailingTagline {
    fn generate_tagline(
        &self,
        _project_name: &str,
    ) -> impl Future<Output = Result<String, TaglineError>> + Send {
        async {
            Err(TaglineError::Server {
                status: 500,
                body: "inference backend unavailable".to_string(),
            })
        }
    }
}

/// Generator double that reports an empty model response.
#[derive(Debug, Clone)]
pub struct EmptyTagline;

impl TaglineGenerator for EmptyTagline {
    fn generate_tagline(
        &self,
        _project_name: &str,
    ) -> impl Future<Output = Result<String, TaglineError>> + Send {
        async { Err(TaglineError::EmptyResponse) }
    }
}
