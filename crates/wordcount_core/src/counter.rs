use std::io;

use crate::{count_words, ChunkCountState};

/// Owns the count state of a single stream.
///
/// Also usable as an [`io::Write`] sink so a reader can be copied straight
/// into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounter {
    state: ChunkCountState,
    chunks: u64,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next chunk and returns the words it started.
    pub fn feed(&mut self, chunk: &[u8]) -> u64 {
        if !chunk.is_empty() {
            self.chunks += 1;
        }
        count_words(chunk, &mut self.state)
    }

    pub fn total(&self) -> u64 {
        self.state.total_words
    }

    pub fn in_word(&self) -> bool {
        self.state.in_word
    }

    /// Number of non-empty chunks fed so far.
    pub fn chunks(&self) -> u64 {
        self.chunks
    }

    pub fn state(&self) -> ChunkCountState {
        self.state
    }

    pub fn finish(self) -> u64 {
        self.state.total_words
    }
}

impl io::Write for WordCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.feed(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
