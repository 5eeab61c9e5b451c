pub mod status;
pub mod sync;

use std::path::PathBuf;

use clap::Args;
use pagedex_core::SiteLayout;

/// Location of the pages directory and the index file.
#[derive(Args, Debug, Clone)]
pub struct SiteArgs {
    /// Site root; `git pull` runs here and relative paths resolve against it.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Pages directory.
    #[arg(long, default_value = SiteLayout::DEFAULT_PAGES_DIR)]
    pub pages: PathBuf,

    /// Index file.
    #[arg(long, default_value = SiteLayout::DEFAULT_INDEX_FILE)]
    pub index: PathBuf,
}

impl Default for SiteArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            pages: PathBuf::from(SiteLayout::DEFAULT_PAGES_DIR),
            index: PathBuf::from(SiteLayout::DEFAULT_INDEX_FILE),
        }
    }
}

impl SiteArgs {
    pub fn layout(&self) -> SiteLayout {
        SiteLayout::at(&self.root)
            .with_pages_dir(&self.pages)
            .with_index_file(&self.index)
    }
}
