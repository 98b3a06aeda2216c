//! Wordcount engine: reliable pipe transfer, the result wire format and the
//! two cooperating processes that stream a file and count its words.
mod error;
mod pipe;
mod pipeline;
mod progress;
mod roles;
mod transfer;
mod types;
mod wire;

pub use error::{EngineError, TransferError, WireError};
pub use pipe::PipePair;
pub use pipeline::{
    run_consumer, run_producer, spawn_word_count, PipelineConfig, DEFAULT_CHUNK_SIZE,
};
pub use progress::{ProgressLine, ProgressSink, StdoutProgressSink};
pub use roles::{consume, produce};
pub use transfer::{receive_exact_or_eof, send_all};
pub use types::{ConsumeSummary, ConsumerOutcome, ProduceSummary};
pub use wire::{decode_result, encode_result, receive_result, send_result, RESULT_WIDTH};
