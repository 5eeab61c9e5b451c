//! Interactive metadata provider reading answers line by line.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use pagedex_core::{IndexError, MetadataProvider, PageName, RawMetadata};

pub const TITLE_PROMPT: &str = "Insert title of the post: ";
pub const TAGS_PROMPT: &str = "Insert tags of the post: ";

/// Asks the operator for a title and tags on `output`, reads them from `input`.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` without a newline and block for one line of input.
    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input while waiting for an answer",
            ));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> MetadataProvider for ConsolePrompt<R, W> {
    fn announce(&mut self, page: &PageName) -> Result<(), IndexError> {
        writeln!(self.output, "Missing index found: {page}").map_err(IndexError::Prompt)
    }

    fn provide(&mut self, _page: &PageName) -> Result<RawMetadata, IndexError> {
        let title = self.ask(TITLE_PROMPT).map_err(IndexError::Prompt)?;
        let tags = self.ask(TAGS_PROMPT).map_err(IndexError::Prompt)?;
        Ok(RawMetadata { title, tags })
    }
}
