//! Pages directory scanning and index diffing.

use std::collections::HashSet;
use std::path::Path;

use crate::error::IndexError;
use crate::types::{Index, PageName};

/// List every entry of the pages directory, sorted by name.
///
/// Subdirectories are listed too; a page is any directory entry. Names that
/// are not valid UTF-8 cannot be index keys and are skipped with a warning.
/// Returns `IndexError::PagesDir` if the directory is missing or unreadable.
pub fn list_pages(dir: &Path) -> Result<Vec<PageName>, IndexError> {
    let pages_err = |source| IndexError::PagesDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut pages = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(pages_err)? {
        let entry = entry.map_err(pages_err)?;
        let name = match entry.file_name().into_string() {
            Ok(name) => PageName::from(name),
            Err(raw) => {
                tracing::warn!("skipping page with non-UTF-8 name: {raw:?}");
                continue;
            }
        };
        tracing::debug!("scanned page: {name}");
        pages.push(name);
    }
    pages.sort();
    Ok(pages)
}

/// Pages with no key in `index`, in `pages` order.
pub fn missing_pages(index: &Index, pages: &[PageName]) -> Vec<PageName> {
    pages
        .iter()
        .filter(|p| !index.contains(p.as_str()))
        .cloned()
        .collect()
}

/// Index keys with no matching page, in index order.
pub fn orphaned_entries(index: &Index, pages: &[PageName]) -> Vec<PageName> {
    let present: HashSet<&str> = pages.iter().map(PageName::as_str).collect();
    index
        .pages()
        .filter(|p| !present.contains(p))
        .map(PageName::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageEntry;
    use tempfile::TempDir;

    fn index_of(pages: &[&str]) -> Index {
        let mut index = Index::new();
        for p in pages {
            index.insert(PageName::from(*p), PageEntry::new(*p, vec![], 0));
        }
        index
    }

    fn names(pages: &[&str]) -> Vec<PageName> {
        pages.iter().map(|p| PageName::from(*p)).collect()
    }

    #[test]
    fn list_pages_is_sorted_and_includes_directories() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join("b.html"), "").unwrap();
        std::fs::write(dir.path().join("a.html"), "").unwrap();
        std::fs::create_dir(dir.path().join("c")).unwrap();

        let pages = list_pages(dir.path()).expect("list");
        assert_eq!(pages, names(&["a.html", "b.html", "c"]));
    }

    #[test]
    fn list_pages_missing_dir_is_pages_dir_error() {
        let dir = TempDir::new().expect("tempdir");
        let err = list_pages(&dir.path().join("pages")).unwrap_err();
        assert!(matches!(err, IndexError::PagesDir { .. }), "got: {err}");
        assert!(err.to_string().contains("pages"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn list_pages_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join("ok.html"), "").unwrap();
        std::fs::write(dir.path().join(OsStr::from_bytes(b"bad\xff.html")), "").unwrap();

        let pages = list_pages(dir.path()).expect("list");
        assert_eq!(pages, names(&["ok.html"]));
    }

    #[test]
    fn missing_and_orphaned_are_disjoint_views() {
        let index = index_of(&["gone.html", "p1.html"]);
        let pages = names(&["p1.html", "p2.html"]);
        assert_eq!(missing_pages(&index, &pages), names(&["p2.html"]));
        assert_eq!(orphaned_entries(&index, &pages), names(&["gone.html"]));
    }
}
