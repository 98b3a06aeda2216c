//! The result channel carries exactly one signed 32-bit little-endian integer.

use std::io::{Read, Write};

use crate::transfer::{receive_exact_or_eof, send_all};
use crate::{EngineError, TransferError, WireError};

pub const RESULT_WIDTH: usize = 4;

pub fn encode_result(total: u64) -> Result<[u8; RESULT_WIDTH], WireError> {
    let value = i32::try_from(total).map_err(|_| WireError::CountOutOfRange(total))?;
    Ok(value.to_le_bytes())
}

pub fn decode_result(bytes: [u8; RESULT_WIDTH]) -> Result<u64, WireError> {
    let value = i32::from_le_bytes(bytes);
    u64::try_from(value).map_err(|_| WireError::NegativeCount(value))
}

pub fn send_result<W: Write + ?Sized>(channel: &mut W, total: u64) -> Result<(), EngineError> {
    let frame = encode_result(total)?;
    send_all(channel, &frame)?;
    channel.flush().map_err(TransferError::Write)?;
    Ok(())
}

/// Reads the single result frame, failing if the channel closes early.
pub fn receive_result<R: Read + ?Sized>(channel: &mut R) -> Result<u64, EngineError> {
    let mut frame = [0u8; RESULT_WIDTH];
    let received = receive_exact_or_eof(channel, &mut frame)?;
    if received != RESULT_WIDTH {
        return Err(EngineError::ResultMissing { received });
    }
    Ok(decode_result(frame)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_little_endian() {
        assert_eq!(encode_result(3).unwrap(), [3, 0, 0, 0]);
        assert_eq!(encode_result(0x0102_0304).unwrap(), [4, 3, 2, 1]);
    }

    #[test]
    fn rejects_counts_beyond_i32() {
        assert_eq!(encode_result(i32::MAX as u64).unwrap(), [0xFF, 0xFF, 0xFF, 0x7F]);
        assert_eq!(
            encode_result(i32::MAX as u64 + 1),
            Err(WireError::CountOutOfRange(i32::MAX as u64 + 1))
        );
    }

    #[test]
    fn rejects_negative_counts() {
        assert_eq!(
            decode_result([0xFF, 0xFF, 0xFF, 0xFF]),
            Err(WireError::NegativeCount(-1))
        );
    }
}
