use std::io::{self, Cursor};

use pretty_assertions::assert_eq;
use wordcount_core::{ChunkCountState, WordCounter};

#[test]
fn feed_accumulates_across_chunks() {
    let mut counter = WordCounter::new();
    assert_eq!(counter.feed(b"hi  th"), 2);
    assert!(counter.in_word());
    assert_eq!(counter.feed(b"ere\nfr"), 1);
    assert_eq!(counter.feed(b""), 0);
    assert_eq!(counter.feed(b"iend"), 0);

    assert_eq!(counter.chunks(), 3);
    assert_eq!(
        counter.state(),
        ChunkCountState {
            total_words: 3,
            in_word: true
        }
    );
    assert_eq!(counter.finish(), 3);
}

#[test]
fn reader_can_be_copied_into_counter() {
    let text = "the quick brown fox\njumps over\tthe lazy dog ".repeat(1000);
    let mut reader = Cursor::new(text.as_bytes());
    let mut counter = WordCounter::new();

    let copied = io::copy(&mut reader, &mut counter).unwrap();

    assert_eq!(copied, text.len() as u64);
    assert_eq!(counter.total(), 9000);
    assert!(!counter.in_word());
}

#[test]
fn new_counter_is_empty() {
    let counter = WordCounter::new();
    assert_eq!(counter.total(), 0);
    assert!(!counter.in_word());
    assert_eq!(counter.chunks(), 0);
}
