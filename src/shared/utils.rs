use anyhow::Result;
use solana_sdk::pubkey::Pubkey;

use crate::shared::types::NORMALIZED_DECIMALS;

pub fn format_address(address: &Pubkey) -> String {
    let s = address.to_string();
    format!("{}...{}", &s[..8], &s[s.len() - 8..])
}

pub fn parse_address(address: &str) -> Result<Pubkey> {
    address
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address {}: {}", address, e))
}

/// Render a normalized amount as a decimal string, e.g. 1500000000000000000 -> "1.5"
pub fn format_normalized(amount: u128) -> String {
    let scale = 10u128.pow(NORMALIZED_DECIMALS as u32);
    let whole = amount / scale;
    let frac = amount % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:018}", frac);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
