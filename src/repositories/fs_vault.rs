use crate::config::Config;
use crate::error::{ConfigResult, StoreError, StoreResult};
use crate::markdown::{parse_structure, split_lines};
use crate::models::{DocumentRef, DocumentStructure};
use crate::repositories::traits::DocumentStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

/// Document store over a directory of markdown files.
///
/// Documents are the `.md` files under the root, listed in path order. Identity is
/// the root-relative path with `/` separators. Structure is rescanned from the file
/// text on every request; nothing is cached.
#[derive(Debug, Clone)]
pub struct FsVaultStore {
    root: Arc<PathBuf>,
    include_hidden: bool,
}

impl FsVaultStore {
    /// Create a store rooted at `root`, skipping hidden directories.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
            include_hidden: false,
        }
    }

    /// Create a store from the configured vault root.
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        let root = config.require_vault_root()?;
        Ok(Self::new(root.clone()).with_hidden(config.include_hidden))
    }

    /// Whether to descend into dot-directories.
    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a document, refusing identities that escape the root.
    fn document_path(&self, doc: &DocumentRef) -> StoreResult<PathBuf> {
        let relative = Path::new(&doc.path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || doc.path.is_empty() {
            return Err(StoreError::InvalidPath(doc.path.clone()));
        }
        Ok(self.root.join(relative))
    }

    async fn read_content(&self, doc: &DocumentRef) -> StoreResult<String> {
        let path = self.document_path(doc)?;
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => StoreError::NotFound(doc.path.clone()),
                _ => StoreError::Io {
                    path: doc.path.clone(),
                    source,
                },
            })
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

fn is_markdown(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("md"))
            .unwrap_or(false)
}

fn epoch_millis(time: SystemTime) -> i64 {
    DateTime::<Utc>::from(time).timestamp_millis()
}

/// Root-relative identity with `/` separators.
fn relative_identity(root: &Path, path: &Path) -> StoreResult<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| StoreError::InvalidPath(path.display().to_string()))?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}

fn walk_vault(root: &Path, include_hidden: bool) -> StoreResult<Vec<DocumentRef>> {
    let mut documents = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| include_hidden || !is_hidden(entry));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| root.display().to_string());
            match e.into_io_error() {
                Some(source) => StoreError::Io { path, source },
                None => StoreError::Other(format!("Failed to walk {}", path)),
            }
        })?;
        if !is_markdown(&entry) {
            continue;
        }

        let metadata = entry.metadata().map_err(|e| {
            StoreError::Other(format!("Failed to stat {}: {}", entry.path().display(), e))
        })?;
        let modified = metadata.modified().map(epoch_millis).unwrap_or(0);
        let created = metadata.created().map(epoch_millis).unwrap_or(modified);

        let identity = relative_identity(root, entry.path())?;
        documents.push(DocumentRef::new(identity).with_timestamps(created, modified));
    }

    Ok(documents)
}

#[async_trait]
impl DocumentStore for FsVaultStore {
    async fn list_documents(&self) -> StoreResult<Vec<DocumentRef>> {
        let root = self.root.clone();
        let include_hidden = self.include_hidden;

        let documents = tokio::task::spawn_blocking(move || walk_vault(&root, include_hidden))
            .await
            .map_err(|e| StoreError::Other(format!("Task join error: {}", e)))??;

        tracing::debug!(
            root = %self.root.display(),
            documents = documents.len(),
            "Listed vault documents"
        );
        Ok(documents)
    }

    async fn get_structure(&self, doc: &DocumentRef) -> StoreResult<Option<DocumentStructure>> {
        match self.read_content(doc).await {
            Ok(content) => Ok(Some(parse_structure(&split_lines(&content)))),
            // Deleted since listing: nothing to contribute
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn read_text(&self, doc: &DocumentRef) -> StoreResult<Vec<String>> {
        let content = self.read_content(doc).await?;
        Ok(split_lines(&content))
    }
}
