use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{entities::CustomerType, errors::UnknownCustomerType};

#[derive(Debug)]
pub(crate) struct CustomerTypeModel(CustomerType);
impl FromStr for CustomerTypeModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "independent" => Ok(CustomerTypeModel(CustomerType::Independent)),
            "billto" => Ok(CustomerTypeModel(CustomerType::BillTo)),
            "chain" => Ok(CustomerTypeModel(CustomerType::Chain)),
            _ => Err(UnknownCustomerType::new(s)),
        }
    }
}

impl Into<CustomerType> for CustomerTypeModel {
    fn into(self) -> CustomerType {
        self.0
    }
}
