use std::io::{self, Cursor, ErrorKind, Read};

use pretty_assertions::assert_eq;
use wordcount_engine::{consume, produce, ConsumeSummary, EngineError, ProduceSummary};

struct FailingSource {
    served: bool,
}

impl Read for FailingSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::new(ErrorKind::Other, "disk on fire"));
        }
        self.served = true;
        buf[..5].copy_from_slice(b"words");
        Ok(5)
    }
}

#[test]
fn produce_copies_source_in_chunks() {
    let mut source = Cursor::new(b"abcdefghij".to_vec());
    let mut sink = Vec::new();

    let summary = produce(&mut source, &mut sink, 4).unwrap();

    assert_eq!(
        summary,
        ProduceSummary {
            bytes_sent: 10,
            chunks: 3
        }
    );
    assert_eq!(sink, b"abcdefghij".to_vec());
}

#[test]
fn produce_reports_source_failures() {
    let mut sink = Vec::new();
    let err = produce(&mut FailingSource { served: false }, &mut sink, 16).unwrap_err();

    assert!(matches!(err, EngineError::SourceRead(_)));
    assert_eq!(sink, b"words".to_vec());
}

#[test]
fn consume_counts_words_split_across_reads() {
    let mut data = Cursor::new(b"hi  there\nfriend".to_vec());

    let summary = consume(&mut data, 3).unwrap();

    assert_eq!(
        summary,
        ConsumeSummary {
            bytes_received: 16,
            chunks: 6,
            total_words: 3
        }
    );
    assert!(!summary.is_empty_stream());
}

#[test]
fn consume_of_closed_channel_is_empty() {
    let summary = consume(&mut io::empty(), 4096).unwrap();
    assert!(summary.is_empty_stream());
    assert_eq!(summary.total_words, 0);
}

#[test]
fn zero_chunk_size_is_rejected() {
    assert!(matches!(
        consume(&mut io::empty(), 0),
        Err(EngineError::InvalidChunkSize)
    ));
    assert!(matches!(
        produce(&mut io::empty(), &mut Vec::new(), 0),
        Err(EngineError::InvalidChunkSize)
    ));
}
