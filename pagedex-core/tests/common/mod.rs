//! Provider and clock doubles shared by the integration tests.

use std::collections::VecDeque;

use pagedex_core::{Clock, IndexError, MetadataProvider, PageName, RawMetadata};

/// Answers from a fixed queue, in order; records which pages were asked about.
#[derive(Debug, Default)]
pub struct ScriptedMetadata {
    answers: VecDeque<RawMetadata>,
    asked: Vec<PageName>,
}

impl ScriptedMetadata {
    pub fn new(answers: impl IntoIterator<Item = RawMetadata>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    pub fn asked(&self) -> &[PageName] {
        &self.asked
    }
}

impl MetadataProvider for ScriptedMetadata {
    fn provide(&mut self, page: &PageName) -> Result<RawMetadata, IndexError> {
        self.asked.push(page.clone());
        self.answers.pop_front().ok_or_else(|| {
            IndexError::Prompt(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("no scripted metadata left for {page}"),
            ))
        })
    }
}

pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}
