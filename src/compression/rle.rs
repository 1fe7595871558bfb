//! # Run-Length Encoding
//!
//! Byte-stream compression for tile and sprite data. A run of two or more
//! equal bytes becomes a `[value, value, count]` token; single bytes pass
//! through as literals. Because every run of length >= 2 is token-encoded,
//! two equal consecutive bytes can only be the start of a token, which makes
//! the stream self-describing without a header.

use std::fmt;

/// Longest run a single token can carry; longer runs are split into
/// consecutive capped tokens.
const MAX_RUN: usize = 255;

#[derive(Debug, PartialEq, Eq)]
pub enum RleError {
    /// A run token carried a count of zero.
    ZeroRunLength { offset: usize },
    /// The stream ended in the middle of a run token.
    TruncatedToken { offset: usize },
}

impl fmt::Display for RleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RleError::ZeroRunLength { offset } => {
                write!(f, "run token with zero count at byte {}", offset)
            }
            RleError::TruncatedToken { offset } => {
                write!(f, "stream ends inside a run token at byte {}", offset)
            }
        }
    }
}

/// Compress a byte stream.
pub fn rle_encode(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut i = 0;

    while i < input.len() {
        let value = input[i];
        let mut run = 1;
        while i + run < input.len() && input[i + run] == value && run < MAX_RUN {
            run += 1;
        }

        if run == 1 {
            out.push(value);
        } else {
            out.push(value);
            out.push(value);
            out.push(run as u8);
        }

        i += run;
    }

    out
}

/// Recover the original byte stream from an RLE stream.
pub fn rle_decode(input: &[u8]) -> Result<Vec<u8>, RleError> {
    let mut out = Vec::new();
    let mut i = 0;

    while i < input.len() {
        let value = input[i];

        if i + 1 < input.len() && input[i + 1] == value {
            let count = match input.get(i + 2) {
                Some(&count) => count,
                None => return Err(RleError::TruncatedToken { offset: i }),
            };
            if count == 0 {
                return Err(RleError::ZeroRunLength { offset: i + 2 });
            }
            out.extend(std::iter::repeat(value).take(count as usize));
            i += 3;
        } else {
            out.push(value);
            i += 1;
        }
    }

    Ok(out)
}
