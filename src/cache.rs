//! Local cache of cheat-sheet files.
//!
//! Layout under the cache root:
//!
//! ```text
//! <root>/git.md              topic "git"
//! <root>/git/config.md       subtopic "git:config"
//! ```

use crate::error::{QuickError, Result};
use crate::topic::Topic;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const EXTENSION: &str = "md";

#[derive(Debug, Clone)]
pub struct Cache {
    root: PathBuf,
}

impl Cache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the cache has been populated at all.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Path of the file backing `topic` or `topic:subtopic`.
    pub fn path_for(&self, topic: &str, subtopic: Option<&str>) -> PathBuf {
        match subtopic {
            Some(subtopic) => self
                .root
                .join(topic)
                .join(format!("{}.{}", subtopic, EXTENSION)),
            None => self.root.join(format!("{}.{}", topic, EXTENSION)),
        }
    }

    /// Resolve a parsed topic to its file path.
    pub fn resolve(&self, topic: &Topic) -> Result<PathBuf> {
        let name = checked_name(topic.topic.as_deref().ok_or(QuickError::NoTopic)?)?;
        let subtopic = topic.subtopic.as_deref().map(checked_name).transpose()?;
        let path = self.path_for(name, subtopic);
        debug!(topic = %topic, path = %path.display(), "resolved topic");
        Ok(path)
    }

    /// Read the cached text for a topic.
    pub fn read(&self, topic: &Topic) -> Result<String> {
        let path = self.resolve(topic)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(QuickError::TopicNotFound {
                topic: topic.to_string(),
                path,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// List topic names, or the `topic:subtopic` names under one topic.
    ///
    /// Results are sorted and free of duplicates.
    pub fn list(&self, topic: Option<&str>) -> Result<Vec<String>> {
        if !self.exists() {
            return Err(QuickError::CacheMissing(self.root.clone()));
        }

        let root = glob::Pattern::escape(&self.root.to_string_lossy());
        let mut names = BTreeSet::new();

        match topic {
            None => {
                for path in matching(&format!("{}/*.{}", root, EXTENSION))? {
                    if let Some(stem) = visible_name(path.file_stem()) {
                        names.insert(stem);
                    }
                }
                for path in matching(&format!("{}/*", root))? {
                    if path.is_dir()
                        && let Some(name) = visible_name(path.file_name())
                    {
                        names.insert(name);
                    }
                }
            }
            Some(topic) => {
                let topic = checked_name(topic)?;
                let dir = self.root.join(topic);
                if !dir.is_dir() && !self.path_for(topic, None).is_file() {
                    return Err(QuickError::TopicNotFound {
                        topic: topic.to_string(),
                        path: dir,
                    });
                }

                let pattern = format!(
                    "{}/{}/*.{}",
                    root,
                    glob::Pattern::escape(topic),
                    EXTENSION
                );
                for path in matching(&pattern)? {
                    if let Some(stem) = visible_name(path.file_stem()) {
                        names.insert(format!("{}:{}", topic, stem));
                    }
                }
            }
        }

        debug!(count = names.len(), topic = ?topic, "listed cache");
        Ok(names.into_iter().collect())
    }

    /// Create the directories a new topic file needs.
    pub fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

/// A topic or subtopic must name a single entry inside the cache root.
fn checked_name(name: &str) -> Result<&str> {
    let escapes = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || Path::new(name).is_absolute();
    if escapes {
        return Err(QuickError::InvalidTopic(name.to_string()));
    }
    Ok(name)
}

fn matching(pattern: &str) -> Result<impl Iterator<Item = PathBuf>> {
    Ok(glob::glob(pattern)?.filter_map(|entry| match entry {
        Ok(path) => Some(path),
        Err(e) => {
            warn!(error = %e, "skipping unreadable cache entry");
            None
        }
    }))
}

fn visible_name(name: Option<&std::ffi::OsStr>) -> Option<String> {
    let name = name?.to_str()?;
    (!name.starts_with('.')).then(|| name.to_string())
}
