//! Formatted integer extraction from a buffered text stream.
//!
//! Mirrors what `stream >> int` does on a console: skip leading whitespace
//! (newlines included), take an optional sign and the longest run of ASCII
//! digits, and leave everything after it unread. Nothing is validated; a read
//! that finds no digits simply reports [`Extraction::Failed`].

use crate::domain::model::Extraction;
use crate::utils::error::Result;
use std::io::BufRead;

// Same set as C `isspace`, which also counts vertical tab.
fn is_stream_space(byte: &u8) -> bool {
    byte.is_ascii_whitespace() || *byte == 0x0b
}

fn peek(input: &mut dyn BufRead) -> Result<Option<u8>> {
    let buf = input.fill_buf()?;
    Ok(buf.first().copied())
}

fn skip_whitespace(input: &mut dyn BufRead) -> Result<bool> {
    loop {
        let (skipped, available) = {
            let buf = input.fill_buf()?;
            if buf.is_empty() {
                return Ok(false);
            }
            let skipped = buf.iter().take_while(|b| is_stream_space(b)).count();
            (skipped, buf.len())
        };
        input.consume(skipped);
        if skipped < available {
            return Ok(true);
        }
    }
}

/// Reads one integer token, blocking until one is available or input ends.
pub fn extract_i32(input: &mut dyn BufRead) -> Result<Extraction> {
    if !skip_whitespace(input)? {
        return Ok(Extraction::EndOfInput);
    }

    let negative = match peek(input)? {
        Some(b'-') => {
            input.consume(1);
            true
        }
        Some(b'+') => {
            input.consume(1);
            false
        }
        _ => false,
    };

    let mut magnitude: u64 = 0;
    let mut digits = 0usize;
    let mut overflowed = false;

    while let Some(byte) = peek(input)? {
        if !byte.is_ascii_digit() {
            break;
        }
        input.consume(1);
        digits += 1;
        match magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(byte - b'0')))
        {
            Some(next) => magnitude = next,
            None => overflowed = true,
        }
    }

    if digits == 0 {
        return Ok(Extraction::Failed);
    }

    let limit = if negative {
        i32::MIN.unsigned_abs() as u64
    } else {
        i32::MAX as u64
    };

    if overflowed || magnitude > limit {
        let saturated = if negative { i32::MIN } else { i32::MAX };
        return Ok(Extraction::OutOfRange(saturated));
    }

    let value = if negative {
        (-(magnitude as i64)) as i32
    } else {
        magnitude as i32
    };
    Ok(Extraction::Parsed(value))
}
