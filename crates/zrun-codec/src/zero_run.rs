//! Zero-run codec
//!
//! An encoded stream is a sequence of records, always starting with a zero-run
//! record:
//!
//! - zero run: one length byte `n`, standing for `n` zero bytes
//! - literal run: one length byte `n` followed by `n` verbatim bytes
//!
//! A literal run keeps going across a single zero byte as long as the byte after
//! it is non-zero, so isolated zeros do not split a run. Two zeros in a row
//! always end it. The stream may stop after either record kind.

use zrun_core::consts::{MAX_LITERAL_RUN, MAX_LITERAL_RUN_BEFORE_ZERO, MAX_ZERO_RUN};
use zrun_core::{ZrunError, ZrunResult};

/// Which record comes next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Zeros,
    Literals,
}

/// Encode `data` into a fresh buffer
pub fn encode(data: &[u8]) -> Vec<u8> {
    // One length byte per record on top of the payload.
    let mut out = Vec::with_capacity(data.len() + data.len() / MAX_LITERAL_RUN + 2);
    encode_into(data, &mut out);
    out
}

/// Encode `data`, appending the records to `out`
pub fn encode_into(data: &[u8], out: &mut Vec<u8>) {
    let end = data.len();
    let mut pos = 0;
    let mut state = RunState::Zeros;

    loop {
        match state {
            RunState::Zeros => {
                let run = zero_run_len(data, pos);
                out.push(run as u8);
                pos += run;
                state = RunState::Literals;
            }
            RunState::Literals => {
                let run = literal_run_len(data, pos);
                out.push(run as u8);
                out.extend_from_slice(&data[pos..pos + run]);
                pos += run;
                state = RunState::Zeros;
            }
        }

        if pos >= end {
            break;
        }
    }
}

/// Byte at `pos`, zero past the end of the input
#[inline]
fn byte_at(data: &[u8], pos: usize) -> u8 {
    data.get(pos).copied().unwrap_or(0)
}

fn zero_run_len(data: &[u8], pos: usize) -> usize {
    data[pos.min(data.len())..]
        .iter()
        .take(MAX_ZERO_RUN)
        .take_while(|&&b| b == 0)
        .count()
}

fn literal_run_len(data: &[u8], pos: usize) -> usize {
    let mut len = 0;
    while (byte_at(data, pos + len) != 0 && len < MAX_LITERAL_RUN)
        || (byte_at(data, pos + len + 1) != 0 && len < MAX_LITERAL_RUN_BEFORE_ZERO)
    {
        len += 1;
    }
    len
}

/// Decode a zero-run stream into a fresh buffer
pub fn decode(data: &[u8]) -> ZrunResult<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len() * 2);
    decode_into(data, &mut out)?;
    Ok(out)
}

/// Decode a zero-run stream, appending the bytes to `out`
///
/// On error `out` is left as it was on entry.
pub fn decode_into(data: &[u8], out: &mut Vec<u8>) -> ZrunResult<()> {
    let start = out.len();
    let mut pos = 0;
    let mut state = RunState::Zeros;

    while pos < data.len() {
        let run = data[pos] as usize;
        pos += 1;

        match state {
            RunState::Zeros => {
                out.resize(out.len() + run, 0);
                state = RunState::Literals;
            }
            RunState::Literals => {
                let Some(literals) = data.get(pos..pos + run) else {
                    out.truncate(start);
                    return Err(ZrunError::MalformedStream {
                        offset: pos - 1,
                        needed: run,
                        available: data.len() - pos,
                    });
                };
                out.extend_from_slice(literals);
                pos += run;
                state = RunState::Zeros;
            }
        }
    }

    Ok(())
}
