//! Sources of page metadata for entries missing from the index.

use crate::error::IndexError;
use crate::types::PageName;

/// Raw operator answers for one page, before tag splitting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawMetadata {
    pub title: String,
    pub tags: String,
}

impl RawMetadata {
    pub fn new(title: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tags: tags.into(),
        }
    }
}

/// Supplies a title and a tags string for a page missing from the index.
///
/// The console prompt in `pagedex-cli` is the interactive implementation.
pub trait MetadataProvider {
    /// Called once per missing page, before [`MetadataProvider::provide`].
    fn announce(&mut self, _page: &PageName) -> Result<(), IndexError> {
        Ok(())
    }

    fn provide(&mut self, page: &PageName) -> Result<RawMetadata, IndexError>;
}
