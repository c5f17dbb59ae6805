//! Sources of operator burn decisions.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Supplies one line of operator text per tick.
pub trait BurnSource {
    /// Next operator entry, or `None` once the source is exhausted.
    fn next_burn(&mut self) -> io::Result<Option<String>>;

    /// Whether entries should be echoed after the prompt because nobody typed them.
    fn echoes(&self) -> bool {
        false
    }
}

/// Reads entries line by line, typically from stdin.
pub struct StdinBurns<R: BufRead> {
    reader: R,
}

impl<R: BufRead> StdinBurns<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl StdinBurns<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> BurnSource for StdinBurns<R> {
    fn next_burn(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Replays a fixed list of entries, then reports exhaustion.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBurns {
    entries: VecDeque<String>,
}

impl ScriptedBurns {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }
}

impl BurnSource for ScriptedBurns {
    fn next_burn(&mut self) -> io::Result<Option<String>> {
        Ok(self.entries.pop_front())
    }

    fn echoes(&self) -> bool {
        true
    }
}

impl<B: BurnSource + ?Sized> BurnSource for Box<B> {
    fn next_burn(&mut self) -> io::Result<Option<String>> {
        (**self).next_burn()
    }

    fn echoes(&self) -> bool {
        (**self).echoes()
    }
}
