// src/math.rs
use alloy_primitives::U256;

use crate::shared::errors::ConvertError;

/// Largest decimal count the converter accepts; 10^38 still fits in 128 bits
pub const MAX_DECIMALS: u8 = 38;

/// Result of rescaling an amount between two fixed-point decimal scales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converted {
    /// Amount at the target scale
    pub amount: u128,
    /// Remainder lost when scaling down, in source-scale units
    pub truncated: u128,
}

fn pow10(exp: u8) -> U256 {
    U256::from(10u64).pow(U256::from(exp))
}

/// Rescale `amount` from `from_decimals` to `to_decimals`.
///
/// Scaling down divides and reports the division remainder as `truncated` so
/// callers can account for the lost precision instead of silently dropping it.
/// Scaling up multiplies with a 256-bit intermediate; no truncation is
/// possible in that direction.
pub fn convert_decimals(
    amount: u128,
    from_decimals: u8,
    to_decimals: u8,
) -> Result<Converted, ConvertError> {
    if from_decimals > MAX_DECIMALS {
        return Err(ConvertError::DecimalsOutOfRange(from_decimals));
    }
    if to_decimals > MAX_DECIMALS {
        return Err(ConvertError::DecimalsOutOfRange(to_decimals));
    }

    use std::cmp::Ordering;
    match from_decimals.cmp(&to_decimals) {
        Ordering::Equal => Ok(Converted {
            amount,
            truncated: 0,
        }),
        Ordering::Greater => {
            let factor = pow10(from_decimals - to_decimals);
            let value = U256::from(amount);
            let converted = u128::try_from(value / factor).map_err(|_| ConvertError::Overflow)?;
            let truncated = u128::try_from(value % factor).map_err(|_| ConvertError::Overflow)?;
            Ok(Converted {
                amount: converted,
                truncated,
            })
        }
        Ordering::Less => {
            let scaled = U256::from(amount) * pow10(to_decimals - from_decimals);
            let converted = u128::try_from(scaled).map_err(|_| ConvertError::Overflow)?;
            Ok(Converted {
                amount: converted,
                truncated: 0,
            })
        }
    }
}
