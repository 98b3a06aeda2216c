//! The streaming halves of the pipeline, independent of how the channels
//! were created.

use std::io::{ErrorKind, Read, Write};

use engine_logging::{engine_debug, engine_trace};
use wordcount_core::WordCounter;

use crate::transfer::send_all;
use crate::{ConsumeSummary, EngineError, ProduceSummary, TransferError};

/// Streams `source` into `data_tx` in chunks of at most `chunk_size` bytes.
pub fn produce<R: Read + ?Sized, W: Write + ?Sized>(
    source: &mut R,
    data_tx: &mut W,
    chunk_size: usize,
) -> Result<ProduceSummary, EngineError> {
    if chunk_size == 0 {
        return Err(EngineError::InvalidChunkSize);
    }

    let mut buf = vec![0u8; chunk_size];
    let mut summary = ProduceSummary::default();
    loop {
        let n = match source.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(EngineError::SourceRead(err)),
        };
        send_all(data_tx, &buf[..n])?;
        summary.bytes_sent += n as u64;
        summary.chunks += 1;
        engine_trace!("sent chunk {} ({} bytes)", summary.chunks, n);
    }
    data_tx.flush().map_err(TransferError::Write)?;

    engine_debug!(
        "producer done: {} bytes in {} chunks",
        summary.bytes_sent,
        summary.chunks
    );
    Ok(summary)
}

/// Reads `data_rx` to end-of-stream and counts the words in it.
pub fn consume<R: Read + ?Sized>(
    data_rx: &mut R,
    chunk_size: usize,
) -> Result<ConsumeSummary, EngineError> {
    if chunk_size == 0 {
        return Err(EngineError::InvalidChunkSize);
    }

    let mut buf = vec![0u8; chunk_size];
    let mut counter = WordCounter::new();
    let mut bytes_received = 0u64;
    loop {
        let n = match data_rx.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(TransferError::Read(err).into()),
        };
        let started = counter.feed(&buf[..n]);
        bytes_received += n as u64;
        engine_trace!(
            "received {} bytes, {} new words, in_word={}",
            n,
            started,
            counter.in_word()
        );
    }

    let summary = ConsumeSummary {
        bytes_received,
        chunks: counter.chunks(),
        total_words: counter.total(),
    };
    engine_debug!(
        "consumer done: {} bytes in {} chunks, {} words",
        summary.bytes_received,
        summary.chunks,
        summary.total_words
    );
    Ok(summary)
}
