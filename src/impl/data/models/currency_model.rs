use std::str::FromStr;

use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::errors::InvalidIsoCurrencyCode;

#[derive(Debug)]
pub(crate) struct CurrencyModel(Currency);
impl FromStr for CurrencyModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(&s.trim().to_uppercase())
            .map(CurrencyModel)
            .ok_or_else(|| InvalidIsoCurrencyCode::new(s))
    }
}

impl Into<Currency> for CurrencyModel {
    fn into(self) -> Currency {
        self.0
    }
}
