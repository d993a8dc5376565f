//! Throwaway resource trees for bundle loading tests.
//!
//! # Examples
//!
//! ```
//! use freecol_messages_test_helpers::fixtures::ResourceTree;
//!
//! let tree = ResourceTree::new().expect("temp dir");
//! let i18n = tree
//!     .properties("i18n", "FreeColMessages.properties", &[("greeting", "Hello")])
//!     .expect("write resource");
//! assert!(i18n.ends_with("i18n/FreeColMessages.properties"));
//! ```

use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
#[derive(Debug)]
pub struct ResourceTree {
    root: Utf8PathBuf,
    _dir: TempDir,
}

impl ResourceTree {
    /// Creates an empty tree.
    ///
    /// # Errors
    ///
    /// Returns an error when the temporary directory cannot be created or its
    /// path is not valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("create temporary resource tree")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("temporary path is not UTF-8: {}", path.display()))?;
        Ok(Self { root, _dir: dir })
    }

    /// Path of `relative` inside the tree; nothing is created.
    #[must_use]
    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error when the file or its parents cannot be written.
    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> Result<Utf8PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Writes a `.properties` file named `file` in directory `dir`.
    ///
    /// # Errors
    ///
    /// See [`ResourceTree::write`].
    pub fn properties(
        &self,
        dir: &str,
        file: &str,
        entries: &[(&str, &str)],
    ) -> Result<Utf8PathBuf> {
        let mut text = String::new();
        for (key, value) in entries {
            text.push_str(key);
            text.push('=');
            text.push_str(value);
            text.push('\n');
        }
        self.write(&format!("{dir}/{file}"), text)
    }
}
