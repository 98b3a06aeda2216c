//! Full-buffer transfer over byte channels that may move fewer bytes than
//! asked for, or be interrupted by a signal, on any single call.

use std::io::{ErrorKind, Read, Write};

use engine_logging::engine_trace;

use crate::TransferError;

/// Writes every byte of `bytes` to `channel`.
///
/// Partial writes are continued and `Interrupted` is retried. Any other
/// failure aborts with the error; a write that accepts zero bytes is
/// reported as [`TransferError::WriteZero`].
pub fn send_all<W: Write + ?Sized>(channel: &mut W, bytes: &[u8]) -> Result<usize, TransferError> {
    let mut sent = 0;
    while sent < bytes.len() {
        match channel.write(&bytes[sent..]) {
            Ok(0) => {
                return Err(TransferError::WriteZero {
                    remaining: bytes.len() - sent,
                })
            }
            Ok(n) => sent += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => {
                engine_trace!("write interrupted after {} of {} bytes, retrying", sent, bytes.len());
            }
            Err(err) => return Err(TransferError::Write(err)),
        }
    }
    Ok(sent)
}

/// Reads into `buf` until it is full or the channel reports end-of-stream.
///
/// Returns the number of bytes received. A short count is not an error here;
/// callers compare it with `buf.len()` to detect a closed channel.
pub fn receive_exact_or_eof<R: Read + ?Sized>(
    channel: &mut R,
    buf: &mut [u8],
) -> Result<usize, TransferError> {
    let mut total = 0;
    while total < buf.len() {
        match channel.read(&mut buf[total..]) {
            Ok(0) => {
                engine_trace!("end of stream after {} of {} bytes", total, buf.len());
                break;
            }
            Ok(n) => total += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(TransferError::Read(err)),
        }
    }
    Ok(total)
}
