use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use tokio::fs as async_fs;
use tracing::{debug, info};

use super::brief::Brief;

/// Shared paths and raw file operations behind a [`super::BriefStore`].
///
/// The data file is a JSON array of [`Brief`] records; the upload
/// directory holds every attachment across all briefs under its
/// original filename. Last writer wins on both; there is no locking.
pub(super) struct StoreState {
    data_file: PathBuf,
    upload_dir: PathBuf,
}

impl std::fmt::Debug for StoreState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreState")
            .field("data_file", &self.data_file)
            .field("upload_dir", &self.upload_dir)
            .finish()
    }
}

impl StoreState {
    pub(super) fn open<P: AsRef<Path>, Q: AsRef<Path>>(
        data_file: P,
        upload_dir: Q,
    ) -> anyhow::Result<Self> {
        let upload_dir = upload_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&upload_dir)
            .with_context(|| format!("Failed to create upload directory {:?}", upload_dir))?;
        Ok(Self {
            data_file: data_file.as_ref().to_path_buf(),
            upload_dir,
        })
    }

    /// Read every stored brief. An absent data file is an empty store;
    /// a present but malformed file is an error.
    pub(super) async fn load(&self) -> anyhow::Result<Vec<Brief>> {
        let bytes = match async_fs::read(&self.data_file).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read data file {:?}", self.data_file));
            }
        };
        let briefs = serde_json::from_slice(&bytes)
            .with_context(|| format!("Data file {:?} is not a valid brief list", self.data_file))?;
        Ok(briefs)
    }

    /// Replace the data file with the full record list, via
    /// write-to-temp-then-rename in the same directory.
    pub(super) async fn save_all(&self, briefs: &[Brief]) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(briefs)?;

        let mut tmp_name = self
            .data_file
            .file_name()
            .map(|name| name.to_os_string())
            .with_context(|| format!("Data file path {:?} has no file name", self.data_file))?;
        tmp_name.push(".tmp");
        let tmp_path = self.data_file.with_file_name(tmp_name);

        async_fs::write(&tmp_path, &json)
            .await
            .with_context(|| format!("Failed to write temp data file {:?}", tmp_path))?;
        async_fs::rename(&tmp_path, &self.data_file)
            .await
            .with_context(|| {
                format!(
                    "Failed to move temp data file {:?} into place at {:?}",
                    tmp_path, self.data_file
                )
            })?;

        debug!(count = briefs.len(), data_file = ?self.data_file, "saved brief list");
        Ok(())
    }

    /// Delete the data file and every file in the upload directory.
    /// Unconditional, no undo.
    pub(super) async fn clear(&self) -> anyhow::Result<()> {
        match async_fs::remove_file(&self.data_file).await {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to delete data file {:?}", self.data_file));
            }
        }

        let mut entries = async_fs::read_dir(&self.upload_dir)
            .await
            .with_context(|| format!("Failed to list upload directory {:?}", self.upload_dir))?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                async_fs::remove_file(entry.path())
                    .await
                    .with_context(|| format!("Failed to delete upload {:?}", entry.path()))?;
            }
        }

        info!(data_file = ?self.data_file, upload_dir = ?self.upload_dir, "cleared brief store");
        Ok(())
    }

    /// Copy an attachment into the upload directory under its original
    /// filename, overwriting any existing file of the same name.
    /// Returns the filename written.
    pub(super) async fn store_upload(&self, source: &Path) -> anyhow::Result<String> {
        let fname = source
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
            .with_context(|| format!("Upload source {:?} has no usable file name", source))?;
        let dest_path = self.upload_dir.join(&fname);
        async_fs::copy(source, &dest_path).await.with_context(|| {
            format!("Failed to copy upload from {:?} to {:?}", source, dest_path)
        })?;
        debug!(file = %fname, "stored upload");
        Ok(fname)
    }

    /// Read an upload's bytes, or `None` when the referenced file is
    /// missing from the upload directory.
    pub(super) async fn read_upload(&self, name: &str) -> anyhow::Result<Option<Vec<u8>>> {
        let path = self.upload_dir.join(name);
        match async_fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Failed to read upload {:?}", path)),
        }
    }

    pub(super) async fn has_upload(&self, name: &str) -> anyhow::Result<bool> {
        let path = self.upload_dir.join(name);
        let present = async_fs::try_exists(&path)
            .await
            .with_context(|| format!("Failed to check upload {:?}", path))?;
        Ok(present)
    }

    /// Filenames currently in the upload directory.
    pub(super) async fn upload_names(&self) -> anyhow::Result<Vec<String>> {
        let mut entries = async_fs::read_dir(&self.upload_dir)
            .await
            .with_context(|| format!("Failed to list upload directory {:?}", self.upload_dir))?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    pub(super) fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub(super) fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }
}
