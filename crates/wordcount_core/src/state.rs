/// Carry-over between successive chunks of one byte stream.
///
/// `in_word` is only meaningful as the end state of chunk `k` and the start
/// state of chunk `k + 1` of the same stream. Start every new stream from
/// [`ChunkCountState::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChunkCountState {
    /// Words seen so far across all chunks of the stream.
    pub total_words: u64,
    /// The previous chunk ended inside a run of non-separator bytes.
    pub in_word: bool,
}

impl ChunkCountState {
    pub fn new() -> Self {
        Self::default()
    }
}
