//! Wordcount core: pure streaming word segmentation over byte chunks.
mod classify;
mod count;
mod counter;
mod state;

pub use classify::is_word_separator;
pub use count::{count_words, count_words_in};
pub use counter::WordCounter;
pub use state::ChunkCountState;
