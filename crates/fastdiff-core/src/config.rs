//! Comparison configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::difference::Side;
use crate::error::CompareError;

/// Configuration for one comparison run.
///
/// Produced once from user input and read-only for the whole traversal.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CompareConfig {
    /// First root directory.
    pub left_root: PathBuf,

    /// Second root directory.
    pub right_root: PathBuf,

    /// Descend into subdirectories.
    #[builder(default = "false")]
    #[serde(default)]
    pub recursive: bool,

    /// Ignore directories entirely: no messages, no recursion.
    #[builder(default = "false")]
    #[serde(default)]
    pub skip_folders: bool,

    /// Only compare names, never file type or size.
    #[builder(default = "false")]
    #[serde(default)]
    pub names_only: bool,

    /// Never follow symbolic links for the second comparison pass.
    #[builder(default = "false")]
    #[serde(default)]
    pub no_dereference: bool,
}

impl CompareConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        for (label, root) in [("Left", &self.left_root), ("Right", &self.right_root)] {
            match root {
                Some(root) if root.as_os_str().is_empty() => {
                    return Err(format!("{label} root path cannot be empty"));
                }
                Some(_) => {}
                None => return Err(format!("{label} root path is required")),
            }
        }
        Ok(())
    }
}

impl CompareConfig {
    /// Create a new compare config builder.
    pub fn builder() -> CompareConfigBuilder {
        CompareConfigBuilder::default()
    }

    /// Create a config comparing two roots with every option off.
    pub fn new(left_root: impl Into<PathBuf>, right_root: impl Into<PathBuf>) -> Self {
        Self {
            left_root: left_root.into(),
            right_root: right_root.into(),
            recursive: false,
            skip_folders: false,
            names_only: false,
            no_dereference: false,
        }
    }

    /// Root directory of the given side.
    pub fn root(&self, side: Side) -> &Path {
        match side {
            Side::Left => &self.left_root,
            Side::Right => &self.right_root,
        }
    }

    /// Whether symbolic links on both sides get a second, dereferenced pass.
    pub fn dereference(&self) -> bool {
        !self.no_dereference
    }
}

impl From<CompareConfigBuilderError> for CompareError {
    fn from(err: CompareConfigBuilderError) -> Self {
        Self::InvalidConfig {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = CompareConfig::builder()
            .left_root("/data/a")
            .right_root("/data/b")
            .recursive(true)
            .no_dereference(true)
            .build()
            .unwrap();

        assert_eq!(config.left_root, PathBuf::from("/data/a"));
        assert_eq!(config.right_root, PathBuf::from("/data/b"));
        assert!(config.recursive);
        assert!(!config.skip_folders);
        assert!(!config.names_only);
        assert!(!config.dereference());
    }

    #[test]
    fn test_config_builder_requires_roots() {
        let err = CompareConfig::builder().left_root("/data/a").build().unwrap_err();
        assert!(err.to_string().contains("Right root path is required"));

        let err = CompareConfig::builder()
            .left_root("")
            .right_root("/data/b")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));

        let err: CompareError = err.into();
        assert!(matches!(err, CompareError::InvalidConfig { .. }));
    }

    #[test]
    fn test_root_by_side() {
        let config = CompareConfig::new("one", "two");
        assert_eq!(config.root(Side::Left), Path::new("one"));
        assert_eq!(config.root(Side::Right), Path::new("two"));
        assert!(config.dereference());
    }
}
