use crate::{is_word_separator, ChunkCountState};

/// Counts the words that start inside `chunk`, continuing from `state`.
///
/// A word split across two calls is counted once, by the call that sees its
/// first byte. `state.in_word` is updated for the next chunk and the result is
/// added to `state.total_words` (saturating at `u64::MAX`).
pub fn count_words(chunk: &[u8], state: &mut ChunkCountState) -> u64 {
    let mut in_word = state.in_word;
    let mut started = 0u64;

    for &byte in chunk {
        if is_word_separator(byte) {
            in_word = false;
        } else if !in_word {
            started += 1;
            in_word = true;
        }
    }

    state.in_word = in_word;
    state.total_words = state.total_words.saturating_add(started);
    started
}

/// One-shot count of a complete buffer.
pub fn count_words_in(bytes: &[u8]) -> u64 {
    count_words(bytes, &mut ChunkCountState::new())
}
