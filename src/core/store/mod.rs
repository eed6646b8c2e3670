mod brief;
mod state;

use std::{path::Path, sync::Arc};

use state::StoreState;

pub use brief::{Brief, NewBrief};

/// The flat-file record store behind both views: a JSON array of
/// [`Brief`] records plus a flat upload directory. Clones share the
/// same underlying paths and are cheap to move into async tasks.
///
/// This is a single-user store: appends are load-push-save with no
/// locking, so concurrent writers lose updates (last save wins).
#[derive(Debug, Clone)]
pub struct BriefStore {
    state: Arc<StoreState>,
}

impl BriefStore {
    /// Open a store at the given paths, creating the upload directory
    /// if it does not exist yet. The data file is created lazily on
    /// first save.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(
        data_file: P,
        upload_dir: Q,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            state: Arc::new(StoreState::open(data_file, upload_dir)?),
        })
    }

    pub fn data_file(&self) -> &Path {
        self.state.data_file()
    }

    pub fn upload_dir(&self) -> &Path {
        self.state.upload_dir()
    }
}

/// Store operations the submission flow and the listing view depend
/// on. A trait so tests can substitute doubles for the file-backed
/// store.
pub trait BriefRepository: 'static {
    /// All stored briefs; empty when no data file exists yet.
    /// A malformed data file is an error, not an empty list.
    fn load(&self) -> impl Future<Output = anyhow::Result<Vec<Brief>>> + Send;

    /// Overwrite the stored list with the given records.
    fn save_all(&self, briefs: &[Brief]) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Append one record to the stored list.
    fn append(&self, brief: Brief) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Delete the data file and every uploaded file.
    fn clear(&self) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Copy an attachment into the upload directory; returns the
    /// filename written.
    fn store_upload(&self, source: &Path) -> impl Future<Output = anyhow::Result<String>> + Send;

    /// Bytes of a stored upload, or `None` when it is missing.
    fn read_upload(
        &self,
        name: &str,
    ) -> impl Future<Output = anyhow::Result<Option<Vec<u8>>>> + Send;

    fn has_upload(&self, name: &str) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Filenames currently present in the upload directory.
    fn upload_names(&self) -> impl Future<Output = anyhow::Result<Vec<String>>> + Send;
}

impl BriefRepository for BriefStore {
    fn load(&self) -> impl Future<Output = anyhow::Result<Vec<Brief>>> + Send {
        let state = Arc::clone(&self.state);
        async move { state.load().await }
    }

    fn save_all(&self, briefs: &[Brief]) -> impl Future<Output = anyhow::Result<()>> + Send {
        let state = Arc::clone(&self.state);
        let briefs = briefs.to_vec();
        async move { state.save_all(&briefs).await }
    }

    fn append(&self, brief: Brief) -> impl Future<Output = anyhow::Result<()>> + Send {
        let state = Arc::clone(&self.state);
        async move {
            let mut briefs = state.load().await?;
            briefs.push(brief);
            state.save_all(&briefs).await
        }
    }

    fn clear(&self) -> impl Future<Output = anyhow::Result<()>> + Send {
        let state = Arc::clone(&self.state);
        async move { state.clear().await }
    }

    fn store_upload(&self, source: &Path) -> impl Future<Output = anyhow::Result<String>> + Send {
        let state = Arc::clone(&self.state);
        let source = source.to_path_buf();
        async move { state.store_upload(&source).await }
    }

    fn read_upload(
        &self,
        name: &str,
    ) -> impl Future<Output = anyhow::Result<Option<Vec<u8>>>> + Send {
        let state = Arc::clone(&self.state);
        let name = name.to_owned();
        async move { state.read_upload(&name).await }
    }

    fn has_upload(&self, name: &str) -> impl Future<Output = anyhow::Result<bool>> + Send {
        let state = Arc::clone(&self.state);
        let name = name.to_owned();
        async move { state.has_upload(&name).await }
    }

    fn upload_names(&self) -> impl Future<Output = anyhow::Result<Vec<String>>> + Send {
        let state = Arc::clone(&self.state);
        async move { state.upload_names().await }
    }
}
