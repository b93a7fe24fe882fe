//! Integer-only conversion between SOL strings and lamports.

use crate::{Error, Result};
use solana_sdk::native_token::LAMPORTS_PER_SOL;

const DECIMALS: usize = 9;

/// Parses a decimal SOL amount such as `"1.5"` into lamports.
///
/// Rejects negative numbers, more than nine fractional digits and values that
/// overflow `u64`.
pub fn parse_sol(input: &str) -> Result<u64> {
    let input = input.trim();
    let invalid = || Error::InvalidArgument(format!("'{}' is not a valid SOL amount", input));

    let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));
    if (whole.is_empty() && fraction.is_empty())
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }
    if fraction.len() > DECIMALS {
        return Err(Error::InvalidArgument(format!(
            "'{}' has more than {} decimal places",
            input, DECIMALS
        )));
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let fraction: u64 = if fraction.is_empty() {
        0
    } else {
        format!("{:0<width$}", fraction, width = DECIMALS)
            .parse()
            .map_err(|_| invalid())?
    };

    whole
        .checked_mul(LAMPORTS_PER_SOL)
        .and_then(|l| l.checked_add(fraction))
        .ok_or_else(invalid)
}

/// Formats lamports as SOL with trailing zeros trimmed, e.g. `1_500_000_000` as `"1.5"`.
pub fn format_sol(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let fraction = lamports % LAMPORTS_PER_SOL;
    if fraction == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0width$}", fraction, width = DECIMALS);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}
