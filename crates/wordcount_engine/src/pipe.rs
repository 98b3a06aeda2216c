use std::fs::File;

use nix::unistd::pipe;

use crate::EngineError;

/// The two one-way channels between the processes.
///
/// `data_*` carries file bytes from Process 1 to Process 2; `result_*` carries
/// the final count back. Each side drops the two ends it does not use right
/// after the split, otherwise the peer never sees end-of-stream.
#[derive(Debug)]
pub struct PipePair {
    pub data_rx: File,
    pub data_tx: File,
    pub result_rx: File,
    pub result_tx: File,
}

impl PipePair {
    pub fn new() -> Result<Self, EngineError> {
        let (data_rx, data_tx) = pipe().map_err(EngineError::Pipe)?;
        let (result_rx, result_tx) = pipe().map_err(EngineError::Pipe)?;
        Ok(Self {
            data_rx: File::from(data_rx),
            data_tx: File::from(data_tx),
            result_rx: File::from(result_rx),
            result_tx: File::from(result_tx),
        })
    }
}
