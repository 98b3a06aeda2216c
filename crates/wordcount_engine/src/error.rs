use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Hard failures of the reliable transfer helpers.
///
/// Interrupted calls are retried internally and never show up here.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("write to channel failed: {0}")]
    Write(#[source] io::Error),
    #[error("channel accepted no bytes with {remaining} bytes left to send")]
    WriteZero { remaining: usize },
    #[error("read from channel failed: {0}")]
    Read(#[source] io::Error),
}

impl TransferError {
    /// The reading side of the channel is gone.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, TransferError::Write(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("word count {0} does not fit the 32-bit result field")]
    CountOutOfRange(u64),
    #[error("received negative word count {0}")]
    NegativeCount(i32),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,
    #[error("cannot open file \"{path}\": {source}", path = .path.display())]
    OpenSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed while reading source: {0}")]
    SourceRead(#[source] io::Error),
    #[error("did not receive wordcount result from Process 2 (got {received} of 4 bytes)")]
    ResultMissing { received: usize },
    #[error("transfer error: {0}")]
    Transfer(#[from] TransferError),
    #[error("wire error: {0}")]
    Wire(#[from] WireError),
    #[error("failed to create pipe: {0}")]
    Pipe(#[source] nix::Error),
    #[error("failed to fork: {0}")]
    Fork(#[source] nix::Error),
    #[error("failed to wait for Process 2: {0}")]
    Wait(#[source] nix::Error),
}
