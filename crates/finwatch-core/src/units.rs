//! Fixed-point unit conversion and hex helpers.
//!
//! Ethereum JSON-RPC reports quantities as `0x…` hex strings in wei.
//! Scaling to display units must stay exact, so conversions go through
//! `rust_decimal` at a fixed scale instead of floating point.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Decimal places between wei and ETH (1 ETH = 10^18 wei).
pub const ETH_SCALE: u32 = 18;

/// Decimal places between wei and gwei (1 gwei = 10^9 wei).
pub const GWEI_SCALE: u32 = 9;

/// Convert a raw wei quantity to ETH, preserving all 18 fractional digits.
pub fn wei_to_eth(wei: u128) -> Result<Decimal, CoreError> {
    scale_down(wei, ETH_SCALE)
}

/// Convert a raw wei quantity to gwei (gas-price display unit).
pub fn wei_to_gwei(wei: u128) -> Result<Decimal, CoreError> {
    scale_down(wei, GWEI_SCALE)
}

// `Decimal` carries a 96-bit mantissa, so the shift is exact for any
// value below ~7.9e28 wei. Real balances and gas prices sit far under
// that; wider values surface as an error rather than a rounded result.
fn scale_down(wei: u128, scale: u32) -> Result<Decimal, CoreError> {
    let mantissa = i128::try_from(wei)
        .map_err(|_| CoreError::InvalidResponse(format!("wei quantity out of range: {wei}")))?;
    Decimal::try_from_i128_with_scale(mantissa, scale)
        .map_err(|e| CoreError::InvalidResponse(format!("wei quantity {wei} not representable: {e}")))
}

/// Parse an Ethereum JSON-RPC quantity (`0x…` hex, case-insensitive,
/// bare hex tolerated) into an integer.
pub fn parse_quantity(raw: &str) -> Result<u128, CoreError> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    if digits.is_empty() {
        return Err(CoreError::InvalidResponse(format!(
            "empty hex quantity `{raw}`"
        )));
    }
    u128::from_str_radix(digits, 16)
        .map_err(|e| CoreError::InvalidResponse(format!("invalid hex quantity `{raw}`: {e}")))
}

/// Lowercase hex encoding without an extra crate dependency.
pub fn hex_encode(bytes: impl AsRef<[u8]>) -> String {
    bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
}
