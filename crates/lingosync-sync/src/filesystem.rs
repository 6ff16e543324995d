//! Local translation file reader/writer
//!
//! Walks the translation root with `tokio::fs` and converts between the
//! on-disk layout and an in-memory [`TranslationSet`]:
//!
//! - `ROOT/{lang}.json` holds keys with no namespace
//! - `ROOT/{namespace}/{lang}.json` holds that namespace's keys, stored
//!   without the `namespace:` prefix inside the file
//!
//! ## Design Decisions
//!
//! - A missing root or zero matching files yields an empty set (first-run
//!   case), not an error.
//! - **Atomic writes**: temp file + rename in the target directory, so a
//!   failed write never leaves a truncated translation file behind.
//! - Parent directories are created idempotently before writing.
//! - Writing a language is authoritative: namespace files its mapping no
//!   longer mentions are deleted, so dropped keys cannot linger on disk.

use std::path::{Path, PathBuf};

use lingosync_core::domain::{LanguageMap, NamespacedKey, TranslationSet};
use lingosync_format::{FilePattern, Formatter};
use tracing::{debug, instrument};

use crate::error::SyncError;

/// Reader/writer for one translation root directory
pub struct TranslationDir {
    root: PathBuf,
    pattern: FilePattern,
}

impl TranslationDir {
    pub fn new(root: impl Into<PathBuf>, pattern: FilePattern) -> Self {
        Self {
            root: root.into(),
            pattern,
        }
    }

    /// The configured root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read every translation file under the root into a set.
    ///
    /// Files directly under the root carry no namespace; files one
    /// subdirectory deep carry the directory name as their namespace.
    #[instrument(skip(self, formatter), fields(root = %self.root.display()))]
    pub async fn read_all(&self, formatter: &dyn Formatter) -> Result<TranslationSet, SyncError> {
        let mut set = TranslationSet::new();

        if !self.root.exists() {
            debug!("translation root does not exist, starting from an empty set");
            return Ok(set);
        }

        let mut entries = read_dir(&self.root).await?;
        while let Some(entry) = next_entry(&mut entries, &self.root).await? {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| io_error(&path, e))?;

            if file_type.is_dir() {
                let namespace = match path.file_name().and_then(|n| n.to_str()) {
                    Some(name) => name.to_string(),
                    None => continue,
                };
                self.read_namespace_dir(&path, &namespace, formatter, &mut set)
                    .await?;
            } else if let Some(lang) = self.language_of(&path) {
                self.read_file(&path, &lang, None, formatter, &mut set)
                    .await?;
            }
        }

        debug!(
            languages = set.languages().count(),
            keys = set.total_keys(),
            "local read complete"
        );
        Ok(set)
    }

    async fn read_namespace_dir(
        &self,
        dir: &Path,
        namespace: &str,
        formatter: &dyn Formatter,
        set: &mut TranslationSet,
    ) -> Result<(), SyncError> {
        let mut entries = read_dir(dir).await?;
        while let Some(entry) = next_entry(&mut entries, dir).await? {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| io_error(&path, e))?;
            if !file_type.is_file() {
                continue;
            }
            if let Some(lang) = self.language_of(&path) {
                self.read_file(&path, &lang, Some(namespace), formatter, set)
                    .await?;
            }
        }
        Ok(())
    }

    async fn read_file(
        &self,
        path: &Path,
        lang: &str,
        namespace: Option<&str>,
        formatter: &dyn Formatter,
        set: &mut TranslationSet,
    ) -> Result<(), SyncError> {
        debug!(path = %path.display(), lang, ?namespace, "reading translation file");

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| io_error(path, e))?;

        let mapping = formatter.parse(&content).map_err(|e| SyncError::Format {
            path: path.to_path_buf(),
            source: e,
        })?;

        for (key, value) in mapping {
            let combined = NamespacedKey::new(namespace.map(str::to_string), key).combined();
            set.insert(lang, combined, value);
        }
        Ok(())
    }

    fn language_of(&self, path: &Path) -> Option<String> {
        let name = path.file_name()?.to_str()?;
        self.pattern.extract_lang(name).map(str::to_string)
    }

    /// Write one language's on-disk state from its mapping, splitting
    /// combined keys into their namespace files.
    ///
    /// The write is authoritative for the language: the root file is always
    /// written (empty mappings scaffold it) and this language's file is
    /// deleted from namespace directories the mapping no longer mentions, so
    /// afterwards the files hold exactly the mapping's keys. Returns the
    /// paths written.
    #[instrument(skip(self, mapping, formatter), fields(lang, keys = mapping.len()))]
    pub async fn write_language(
        &self,
        lang: &str,
        mapping: &LanguageMap,
        formatter: &dyn Formatter,
    ) -> Result<Vec<PathBuf>, SyncError> {
        let mut by_namespace: std::collections::BTreeMap<Option<String>, LanguageMap> =
            std::collections::BTreeMap::new();

        for (combined, value) in mapping {
            let nk = NamespacedKey::parse(combined);
            by_namespace
                .entry(nk.namespace)
                .or_default()
                .insert(nk.key, value.clone());
        }

        // The root file is always written, so dropped root keys are cleared
        // and a fresh pull scaffolds every configured language.
        by_namespace.entry(None).or_default();

        let file_name = self.pattern.file_name(lang);
        let mut written = Vec::new();

        for (namespace, keys) in &by_namespace {
            let path = match namespace {
                Some(ns) => self.root.join(ns).join(&file_name),
                None => self.root.join(&file_name),
            };

            let content = formatter.format(keys).map_err(|e| SyncError::Format {
                path: path.clone(),
                source: e,
            })?;

            write_atomic(&path, content.as_bytes()).await?;
            debug!(path = %path.display(), keys = keys.len(), "wrote translation file");
            written.push(path);
        }

        self.remove_stale_namespace_files(lang, &by_namespace)
            .await?;

        Ok(written)
    }

    /// Delete this language's file from namespace directories the mapping no
    /// longer mentions, so dropped keys do not survive on disk. Other
    /// languages' files in those directories stay untouched.
    async fn remove_stale_namespace_files(
        &self,
        lang: &str,
        keep: &std::collections::BTreeMap<Option<String>, LanguageMap>,
    ) -> Result<(), SyncError> {
        let file_name = self.pattern.file_name(lang);

        let mut entries = read_dir(&self.root).await?;
        while let Some(entry) = next_entry(&mut entries, &self.root).await? {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| io_error(&path, e))?;
            if !file_type.is_dir() {
                continue;
            }
            let namespace = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            if keep.contains_key(&Some(namespace)) {
                continue;
            }

            let candidate = path.join(&file_name);
            match tokio::fs::remove_file(&candidate).await {
                Ok(()) => {
                    debug!(path = %candidate.display(), "removed stale namespace file");
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(io_error(&candidate, e)),
            }
        }
        Ok(())
    }
}

/// Write via temp file + rename so the target is never left truncated.
async fn write_atomic(path: &Path, data: &[u8]) -> Result<(), SyncError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| io_error(parent, e))?;
    }

    let tmp_path = {
        let mut p = path.as_os_str().to_owned();
        p.push(".tmp");
        PathBuf::from(p)
    };

    tokio::fs::write(&tmp_path, data)
        .await
        .map_err(|e| io_error(&tmp_path, e))?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| io_error(path, e))?;
    Ok(())
}

async fn read_dir(dir: &Path) -> Result<tokio::fs::ReadDir, SyncError> {
    tokio::fs::read_dir(dir).await.map_err(|e| io_error(dir, e))
}

async fn next_entry(
    entries: &mut tokio::fs::ReadDir,
    dir: &Path,
) -> Result<Option<tokio::fs::DirEntry>, SyncError> {
    entries.next_entry().await.map_err(|e| io_error(dir, e))
}

fn io_error(path: &Path, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.to_path_buf(),
        source,
    }
}
