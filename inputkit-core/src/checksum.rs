//! # Checksums
//!
//! Check-digit algorithms for structured identifiers:
//! - [`isbn10_checksum`]: mod-11 weighted sum, last character may be `X`
//! - [`isbn13_checksum`]: alternating 1/3 weights, mod 10
//! - [`luhn_checksum`]: the card-number scheme
//!
//! These functions expect input that already has the right shape (length
//! and character set). Checking the shape is the job of the format
//! validators; here a stray non-digit simply counts as zero.

/// Value of an ASCII digit, zero for anything else.
fn digit(c: u8) -> u32 {
    if c.is_ascii_digit() {
        u32::from(c - b'0')
    } else {
        0
    }
}

/// Verifies an ISBN-10: `sum(d[i] * (10 - i))` over the first nine digits plus
/// the check character (`X` = 10) must be divisible by 11.
///
/// ```rust
/// use inputkit_core::checksum::isbn10_checksum;
///
/// assert!(isbn10_checksum("0306406152"));
/// assert!(isbn10_checksum("080442957X"));
/// assert!(!isbn10_checksum("0306406153"));
/// ```
pub fn isbn10_checksum(isbn: &str) -> bool {
    let bytes = isbn.as_bytes();
    if bytes.len() != 10 {
        return false;
    }

    let mut sum: u32 = bytes[..9]
        .iter()
        .zip((2..=10).rev())
        .map(|(c, weight)| digit(*c) * weight)
        .sum();

    sum += match bytes[9] {
        b'X' => 10,
        c => digit(c),
    };

    sum % 11 == 0
}

/// Verifies an ISBN-13: digits at even positions weigh 1, odd positions weigh 3,
/// and the total must be divisible by 10.
pub fn isbn13_checksum(isbn: &str) -> bool {
    let bytes = isbn.as_bytes();
    if bytes.len() != 13 {
        return false;
    }

    let sum: u32 = bytes
        .iter()
        .enumerate()
        .map(|(i, c)| if i % 2 == 0 { digit(*c) } else { digit(*c) * 3 })
        .sum();

    sum % 10 == 0
}

/// Picks the ISBN-10 or ISBN-13 check by length.
pub fn isbn_checksum(isbn: &str) -> bool {
    match isbn.len() {
        10 => isbn10_checksum(isbn),
        13 => isbn13_checksum(isbn),
        _ => false,
    }
}

/// Verifies a number with the Luhn algorithm.
///
/// Walking from the rightmost digit, every second digit is doubled (9 is
/// subtracted when the result exceeds 9). The number is valid when the sum
/// is divisible by 10.
///
/// ```rust
/// use inputkit_core::checksum::luhn_checksum;
///
/// assert!(luhn_checksum("4532015112830366"));
/// assert!(!luhn_checksum("1234567812345678"));
/// ```
pub fn luhn_checksum(number: &str) -> bool {
    let sum: u32 = number
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            let d = digit(c);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}
