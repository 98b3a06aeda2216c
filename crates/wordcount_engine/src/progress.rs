use std::fmt;
use std::io::{self, Write};

/// User-facing status lines printed by the two processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressLine {
    ReadingFile { path: String },
    SendingData,
    FinishedReceiving,
    Counting,
    SendingResult,
}

impl fmt::Display for ProgressLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressLine::ReadingFile { path } => {
                write!(f, "Process 1 is reading file \"{path}\" now ...")
            }
            ProgressLine::SendingData => write!(f, "Process 1 starts sending data to Process 2 ..."),
            ProgressLine::FinishedReceiving => {
                write!(f, "Process 2 finishes receiving data from Process 1 ...")
            }
            ProgressLine::Counting => write!(f, "Process 2 is counting words now ..."),
            ProgressLine::SendingResult => {
                write!(f, "Process 2 is sending the result back to Process 1 ...")
            }
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, line: ProgressLine);
}

/// Prints each line to stdout and flushes, so output from the two processes
/// is not held back in a buffer across `fork`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutProgressSink;

impl ProgressSink for StdoutProgressSink {
    fn emit(&self, line: ProgressLine) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}
