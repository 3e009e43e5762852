//! Native-token amounts and significant-digit formatting.

use alloy::primitives::utils::parse_units;
use alloy::primitives::U256;
use eyre::{eyre, Result, WrapErr};

/// Decimals of the chain's native token (BNB, like ETH, uses 18).
pub const NATIVE_DECIMALS: u8 = 18;

/// An exact balance of a chain's native token, stored in its smallest unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NativeAmount {
    wei: U256,
    decimals: u8,
}

impl NativeAmount {
    /// Wrap a raw wei value with the default 18 decimals.
    pub const fn from_wei(wei: U256) -> Self {
        Self {
            wei,
            decimals: NATIVE_DECIMALS,
        }
    }

    pub const fn with_decimals(wei: U256, decimals: u8) -> Self {
        Self { wei, decimals }
    }

    /// Parse a human-readable amount such as `"1.5"` into wei.
    ///
    /// # Errors
    /// Returns error for negative or malformed amounts.
    pub fn parse(amount: &str, decimals: u8) -> Result<Self> {
        let trimmed = amount.trim();
        if trimmed.starts_with('-') {
            return Err(eyre!("balance cannot be negative: {trimmed}"));
        }
        let wei = parse_units(trimmed, decimals)
            .wrap_err_with(|| format!("invalid balance amount '{trimmed}'"))?
            .get_absolute();
        Ok(Self { wei, decimals })
    }

    pub const fn wei(&self) -> U256 {
        self.wei
    }

    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.wei.is_zero()
    }

    /// Render the amount with at most `significant` significant digits.
    ///
    /// Rounds half up, drops trailing zeros and never inserts grouping
    /// separators: `1.23456789` gives `"1.235"` at four digits, one million
    /// gives `"1000000"`.
    pub fn to_significant(&self, significant: usize) -> String {
        if self.wei.is_zero() {
            return "0".to_string();
        }
        let significant = significant.max(1);
        let digits: Vec<u8> = self.wei.to_string().bytes().map(|b| b - b'0').collect();

        // Power of ten of the leading digit.
        let mut exponent = digits.len() as i64 - 1 - i64::from(self.decimals);
        let mut kept: Vec<u8> = digits.iter().copied().take(significant).collect();

        if digits.get(significant).is_some_and(|&next| next >= 5) {
            round_up(&mut kept, &mut exponent);
        }
        while kept.len() > 1 && kept.last() == Some(&0) {
            kept.pop();
        }

        place_decimal_point(&kept, exponent)
    }
}

/// Add one unit in the last kept place, carrying left. A carry out of the
/// leading digit shifts the exponent instead of growing the digit count.
fn round_up(kept: &mut Vec<u8>, exponent: &mut i64) {
    for digit in kept.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    kept.insert(0, 1);
    kept.pop();
    *exponent += 1;
}

fn place_decimal_point(kept: &[u8], exponent: i64) -> String {
    let to_char = |d: &u8| char::from(b'0' + d);

    if exponent < 0 {
        let leading_zeros = (-exponent - 1) as usize;
        let mut out = String::from("0.");
        out.extend(std::iter::repeat('0').take(leading_zeros));
        out.extend(kept.iter().map(to_char));
        return out;
    }

    let int_len = exponent as usize + 1;
    let mut out: String = kept.iter().take(int_len).map(to_char).collect();
    if kept.len() < int_len {
        out.extend(std::iter::repeat('0').take(int_len - kept.len()));
    } else if kept.len() > int_len {
        out.push('.');
        out.extend(kept[int_len..].iter().map(to_char));
    }
    out
}
