//! Cover image resolution
//!
//! Books carry only a textual cover reference. Turning that into something
//! displayable is platform-specific, so it sits behind [`CoverResolver`].
//! Anything that cannot be resolved falls back to [`Cover::Placeholder`].

use crate::types::Book;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// System symbol shown when a book has no usable cover
pub const PLACEHOLDER_SYMBOL: &str = "book.closed";

/// A resolved cover asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ImageHandle {
    /// An image file on disk
    Path(PathBuf),

    /// An asset bundled under a name
    Named(String),
}

/// What to draw for a book's cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cover {
    Asset(ImageHandle),
    Placeholder,
}

impl Cover {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Cover::Placeholder)
    }
}

/// Platform capability mapping a cover reference to an image
pub trait CoverResolver: Send + Sync {
    /// Resolve a non-empty reference, or `None` if no such asset exists
    fn resolve_cover_asset(&self, reference: &str) -> Option<ImageHandle>;
}

/// Resolve a book's cover, falling back to the placeholder
pub fn resolve_cover(book: &Book, resolver: &dyn CoverResolver) -> Cover {
    let Some(reference) = book.cover.as_deref().filter(|r| !r.is_empty()) else {
        return Cover::Placeholder;
    };
    match resolver.resolve_cover_asset(reference) {
        Some(handle) => Cover::Asset(handle),
        None => {
            tracing::debug!(reference, "Cover asset not found, using placeholder");
            Cover::Placeholder
        }
    }
}

/// Resolver that never finds anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCovers;

impl CoverResolver for NoCovers {
    fn resolve_cover_asset(&self, _reference: &str) -> Option<ImageHandle> {
        None
    }
}

/// Looks up covers as image files in a directory
#[derive(Debug, Clone)]
pub struct AssetDirResolver {
    root: PathBuf,
    extensions: Vec<String>,
}

impl AssetDirResolver {
    /// Resolve references as file names under `root`, trying common image extensions
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
        }
    }

    /// Replace the extensions tried when the bare reference does not exist
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Join `reference` onto the root, refusing anything that would escape it
    fn candidate(&self, reference: &str) -> Option<PathBuf> {
        let mut normalized = PathBuf::new();
        for component in Path::new(reference).components() {
            match component {
                Component::Normal(c) => normalized.push(c),
                Component::CurDir => {}
                Component::ParentDir | Component::Prefix(_) | Component::RootDir => return None,
            }
        }
        if normalized.as_os_str().is_empty() {
            return None;
        }
        Some(self.root.join(normalized))
    }
}

impl CoverResolver for AssetDirResolver {
    fn resolve_cover_asset(&self, reference: &str) -> Option<ImageHandle> {
        let base = self.candidate(reference)?;
        if base.is_file() {
            return Some(ImageHandle::Path(base));
        }
        self.extensions
            .iter()
            .map(|ext| {
                let mut file = base.clone().into_os_string();
                file.push(".");
                file.push(ext);
                PathBuf::from(file)
            })
            .find(|path| path.is_file())
            .map(ImageHandle::Path)
    }
}

/// Resolver backed by a fixed set of bundled asset names
#[derive(Debug, Clone, Default)]
pub struct NamedAssetResolver {
    names: HashSet<String>,
}

impl NamedAssetResolver {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl CoverResolver for NamedAssetResolver {
    fn resolve_cover_asset(&self, reference: &str) -> Option<ImageHandle> {
        self.names
            .contains(reference)
            .then(|| ImageHandle::Named(reference.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_reference_is_placeholder() {
        let resolver = NamedAssetResolver::new(["swift"]);
        assert_eq!(
            resolve_cover(&Book::new("A", "X"), &resolver),
            Cover::Placeholder
        );
        assert_eq!(
            resolve_cover(&Book::new("A", "X").with_cover(""), &resolver),
            Cover::Placeholder
        );
    }

    #[test]
    fn test_named_assets() {
        let resolver = NamedAssetResolver::new(["swift", "clrs"]);
        let book = Book::new("The Swift Programming Language", "Apple Inc.").with_cover("swift");
        assert_eq!(
            resolve_cover(&book, &resolver),
            Cover::Asset(ImageHandle::Named("swift".to_string()))
        );

        let book = Book::new("Clean Code", "Robert C. Martin").with_cover("clean-code");
        assert!(resolve_cover(&book, &resolver).is_placeholder());
    }

    #[test]
    fn test_no_covers() {
        let book = Book::new("A", "X").with_cover("anything");
        assert!(resolve_cover(&book, &NoCovers).is_placeholder());
    }

    #[test]
    fn test_asset_dir_resolver() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("clrs.png"), b"png").unwrap();
        fs::write(dir.path().join("swift"), b"raw").unwrap();
        fs::create_dir(dir.path().join("folder")).unwrap();

        let resolver = AssetDirResolver::new(dir.path());
        assert_eq!(
            resolver.resolve_cover_asset("clrs"),
            Some(ImageHandle::Path(dir.path().join("clrs.png")))
        );
        assert_eq!(
            resolver.resolve_cover_asset("swift"),
            Some(ImageHandle::Path(dir.path().join("swift")))
        );
        assert_eq!(resolver.resolve_cover_asset("missing"), None);
        assert_eq!(resolver.resolve_cover_asset("folder"), None);
    }

    #[test]
    fn test_asset_dir_custom_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cover.webp"), b"webp").unwrap();

        let resolver = AssetDirResolver::new(dir.path());
        assert_eq!(resolver.resolve_cover_asset("cover"), None);

        let resolver = resolver.with_extensions(["webp"]);
        assert!(resolver.resolve_cover_asset("cover").is_some());
    }

    #[test]
    fn test_asset_dir_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let inner = dir.path().join("covers");
        fs::create_dir(&inner).unwrap();
        fs::write(dir.path().join("secret.png"), b"png").unwrap();

        let resolver = AssetDirResolver::new(&inner);
        assert_eq!(resolver.resolve_cover_asset("../secret"), None);
        assert_eq!(resolver.resolve_cover_asset("/etc/passwd"), None);
    }
}
