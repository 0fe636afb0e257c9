use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidBalance;

/// Statement balance, accepting thousands separators and accounting
/// parentheses for credit balances.
#[derive(Debug)]
pub(crate) struct BalanceModel(pub f64);
impl FromStr for BalanceModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let raw = raw.trim();
        let (is_negative, numeric_part) = match (raw.strip_prefix('('), raw.ends_with(')')) {
            (Some(inner), true) => (true, &inner[..inner.len() - 1]),
            (None, false) => (false, raw),
            // Unbalanced parentheses.
            _ => return Err(InvalidBalance::new(s)),
        };
        let amount = numeric_part
            .trim()
            .parse::<f64>()
            .map_err(|_| InvalidBalance::new(s))?;
        Ok(BalanceModel(if is_negative { -amount } else { amount }))
    }
}

impl Into<f64> for BalanceModel {
    fn into(self) -> f64 {
        self.0
    }
}
