//! Test doubles for the provider and clock seams.

use std::collections::VecDeque;

use crate::error::IndexError;
use crate::metadata::{MetadataProvider, RawMetadata};
use crate::sync::Clock;
use crate::types::PageName;

/// Answers from a fixed queue, in order. Running dry is an `IndexError::Prompt`.
#[derive(Debug, Default)]
pub(crate) struct ScriptedMetadata {
    answers: VecDeque<RawMetadata>,
    asked: Vec<PageName>,
}

impl ScriptedMetadata {
    pub(crate) fn new(answers: impl IntoIterator<Item = RawMetadata>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    pub(crate) fn asked(&self) -> &[PageName] {
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

/// Always returns the same instant.
pub(crate) struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}
