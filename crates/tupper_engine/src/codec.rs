//! Conversions between `k`, binary digits and the pixel grid.
//!
//! The spatial layout is fixed: the binary digit at position
//! `(105 - x) * 17 + y`, counted from the most significant end of the
//! padded digit string, is the cell at column `x`, row `y`. Column 105
//! therefore holds the most significant 17 digits and column 0 the least
//! significant ones, each column read top to bottom.
//!
//! `k` is always `quotient * 17`. Decoding floors `k / 17`, so `k mod 17`
//! is lost and re-encoding reconstructs a multiple of 17.

use std::borrow::Cow;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{CELL_COUNT, EngineError, HEIGHT, PixelMatrix, Result, SCALE, WIDTH};

/// Position of cell `(x, y)` in the padded binary digit string
pub fn bit_index(x: usize, y: usize) -> usize {
    (WIDTH - 1 - x) * HEIGHT + y
}

/// Parse a non-negative decimal integer.
///
/// Surrounding whitespace is ignored. Anything but ASCII digits (signs,
/// underscores, radix prefixes) is rejected.
pub fn parse_decimal(input: &str) -> Result<BigUint> {
    let digits = input.trim();
    if digits.is_empty() {
        return Err(EngineError::invalid_input("k must not be empty"));
    }
    if let Some(ch) = digits.chars().find(|ch| !ch.is_ascii_digit()) {
        return Err(EngineError::invalid_input(format!("'{ch}' is not a decimal digit")));
    }
    BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| EngineError::invalid_input("k is not a decimal integer"))
}

/// Parse a string of binary digits, most significant first.
///
/// Surrounding whitespace is ignored; an empty string yields no digits.
pub fn parse_binary(input: &str) -> Result<Vec<u8>> {
    input
        .trim()
        .chars()
        .map(|ch| match ch {
            '0' => Ok(0),
            '1' => Ok(1),
            other => Err(EngineError::invalid_input(format!("'{other}' is not a binary digit"))),
        })
        .collect()
}

/// Decode `k` into its pixel grid.
///
/// Accepts any non-negative decimal, including `0`.
pub fn decode(k: &str) -> Result<PixelMatrix> {
    let quotient = parse_decimal(k)? / SCALE;
    Ok(matrix_from_digits(&quotient.to_radix_be(2)))
}

/// Decode binary digits of the quotient into a pixel grid, skipping the
/// division by 17.
pub fn decode_binary(bits: &str) -> Result<PixelMatrix> {
    let digits = parse_binary(bits)?;
    Ok(matrix_from_digits(&digits))
}

/// Encode a pixel grid back into `k`, as a decimal string.
pub fn encode(matrix: &PixelMatrix) -> String {
    let quotient = BigUint::from_radix_be(&encode_digits(matrix), 2).unwrap_or_else(BigUint::zero);
    (quotient * SCALE).to_str_radix(10)
}

/// The padded [`CELL_COUNT`] digit binary form of a grid
pub fn binary_digits(matrix: &PixelMatrix) -> String {
    encode_digits(matrix).iter().map(|&d| if d == 1 { '1' } else { '0' }).collect()
}

/// Unpadded binary of `floor(k / 17)`; `"0"` for a zero quotient.
pub fn quotient_binary(k: &str) -> Result<String> {
    let quotient = parse_decimal(k)? / SCALE;
    Ok(quotient.to_str_radix(2))
}

fn encode_digits(matrix: &PixelMatrix) -> Vec<u8> {
    let rows = matrix.rows();
    let mut digits = Vec::with_capacity(CELL_COUNT);
    for x in (0..WIDTH).rev() {
        for row in rows.iter().take(HEIGHT) {
            digits.push(u8::from(row[x]));
        }
    }
    digits
}

fn matrix_from_digits(digits: &[u8]) -> PixelMatrix {
    let padded: Cow<'_, [u8]> = if digits.len() < CELL_COUNT {
        let mut padded = vec![0; CELL_COUNT - digits.len()];
        padded.extend_from_slice(digits);
        Cow::Owned(padded)
    } else {
        if digits.len() > CELL_COUNT {
            log::warn!(
                "quotient has {} binary digits, only the leading {CELL_COUNT} fit the grid; re-encoding will not reproduce k",
                digits.len()
            );
        }
        Cow::Borrowed(digits)
    };
    PixelMatrix::from_fn(|x, y| padded[bit_index(x, y)] == 1)
}
