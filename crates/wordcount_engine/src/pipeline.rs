use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use engine_logging::{engine_debug, engine_error, engine_info, engine_warn};
use nix::errno::Errno;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{fork, ForkResult, Pid};

use crate::roles::{consume, produce};
use crate::wire::{receive_result, send_result};
use crate::{ConsumerOutcome, EngineError, PipePair, ProgressLine, ProgressSink};

pub const DEFAULT_CHUNK_SIZE: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Read size for both the file and the data channel.
    pub chunk_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.chunk_size == 0 {
            return Err(EngineError::InvalidChunkSize);
        }
        Ok(())
    }
}

/// Process 1: stream the file at `path` into `data_tx`, then wait for the
/// count on `result_rx`.
///
/// On any failure both channel ends are closed, result end first, so the
/// consumer sees end-of-stream and finds nobody waiting for its answer.
pub fn run_producer<W: Write, R: Read>(
    path: &Path,
    mut data_tx: W,
    mut result_rx: R,
    config: &PipelineConfig,
    sink: &dyn ProgressSink,
) -> Result<u64, EngineError> {
    sink.emit(ProgressLine::ReadingFile {
        path: path.display().to_string(),
    });

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            drop(result_rx);
            drop(data_tx);
            return Err(EngineError::OpenSource {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    sink.emit(ProgressLine::SendingData);
    let summary = match produce(&mut file, &mut data_tx, config.chunk_size) {
        Ok(summary) => summary,
        Err(err) => {
            drop(result_rx);
            drop(data_tx);
            return Err(err);
        }
    };
    engine_info!("sent {} bytes from {:?}", summary.bytes_sent, path);

    // Closing the data channel is the end-of-stream signal.
    drop(data_tx);

    receive_result(&mut result_rx)
}

/// Process 2: count everything on `data_rx` and send the total on `result_tx`.
///
/// When nothing at all arrived, the result is sent before any progress is
/// reported: if Process 1 already hung up, the consumer stays quiet.
pub fn run_consumer<R: Read, W: Write>(
    mut data_rx: R,
    mut result_tx: W,
    config: &PipelineConfig,
    sink: &dyn ProgressSink,
) -> Result<ConsumerOutcome, EngineError> {
    let summary = consume(&mut data_rx, config.chunk_size)?;
    drop(data_rx);

    if summary.is_empty_stream() {
        if !deliver(&mut result_tx, summary.total_words)? {
            engine_debug!("no data and no reader for the result, exiting quietly");
            return Ok(ConsumerOutcome::ProducerGone);
        }
        emit_consumer_progress(sink);
    } else {
        emit_consumer_progress(sink);
        if !deliver(&mut result_tx, summary.total_words)? {
            engine_warn!("Process 1 closed the result channel before the count was sent");
            return Ok(ConsumerOutcome::ProducerGone);
        }
    }

    Ok(ConsumerOutcome::Delivered(summary.total_words))
}

fn emit_consumer_progress(sink: &dyn ProgressSink) {
    sink.emit(ProgressLine::FinishedReceiving);
    sink.emit(ProgressLine::Counting);
    sink.emit(ProgressLine::SendingResult);
}

/// Returns `false` if the result channel has no reader.
fn deliver<W: Write>(result_tx: &mut W, total: u64) -> Result<bool, EngineError> {
    match send_result(result_tx, total) {
        Ok(()) => Ok(true),
        Err(EngineError::Transfer(err)) if err.is_broken_pipe() => Ok(false),
        Err(err) => Err(err),
    }
}

/// Counts the words of the file at `path` using two processes joined by pipes.
///
/// The calling process becomes Process 1 (producer); a forked child becomes
/// Process 2 (consumer) and exits inside this function. The child is always
/// reaped before this returns in the parent.
///
/// Must be called while the process is single-threaded.
pub fn spawn_word_count(
    path: &Path,
    config: &PipelineConfig,
    sink: &dyn ProgressSink,
) -> Result<u64, EngineError> {
    config.validate()?;

    let PipePair {
        data_rx,
        data_tx,
        result_rx,
        result_tx,
    } = PipePair::new()?;

    // SAFETY: the caller guarantees no other threads exist, so the child
    // inherits no locks held elsewhere.
    match unsafe { fork() }.map_err(EngineError::Fork)? {
        ForkResult::Child => {
            drop(data_tx);
            drop(result_rx);
            let code = match run_consumer(data_rx, result_tx, config, sink) {
                Ok(outcome) => {
                    engine_debug!("Process 2 finished: {:?}", outcome);
                    0
                }
                Err(err) => {
                    engine_error!("Process 2 failed: {}", err);
                    eprintln!("Error: {err}");
                    1
                }
            };
            let _ = io::stdout().flush();
            process::exit(code);
        }
        ForkResult::Parent { child } => {
            drop(data_rx);
            drop(result_tx);
            engine_debug!("forked Process 2 as pid {}", child);
            let result = run_producer(path, data_tx, result_rx, config, sink);
            let reaped = reap(child);
            let total = result?;
            reaped?;
            Ok(total)
        }
    }
}

fn reap(child: Pid) -> Result<(), EngineError> {
    loop {
        match waitpid(child, None) {
            Ok(WaitStatus::Exited(pid, 0)) => {
                engine_debug!("reaped Process 2 (pid {})", pid);
                return Ok(());
            }
            Ok(status) => {
                engine_warn!("Process 2 ended abnormally: {:?}", status);
                return Ok(());
            }
            Err(Errno::EINTR) => continue,
            Err(err) => return Err(EngineError::Wait(err)),
        }
    }
}
