use iso_currency::Currency;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde_derive::Serialize)]
pub struct CustomerId(pub(crate) String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde_derive::Serialize)]
pub struct RepresentativeId(pub(crate) String);

/// Account manager associated with a customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde_derive::Serialize)]
pub struct Representative {
    pub id: RepresentativeId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize)]
pub enum CustomerType {
    Independent,
    BillTo,
    Chain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub customer_number: String,
    pub email: String,
    pub representative: Representative,
    pub customer_type: CustomerType,
    /// Outstanding AR balance shown on the statement.
    pub balance: f64,
    pub currency: Currency,
}

// Shorthand constructors.

pub fn customer_id(id: impl Into<String>) -> CustomerId {
    CustomerId(id.into())
}

pub fn rep_id(id: impl Into<String>) -> RepresentativeId {
    RepresentativeId(id.into())
}

pub fn representative(id: impl Into<String>, name: impl Into<String>) -> Representative {
    Representative {
        id: rep_id(id),
        name: name.into(),
    }
}

impl CustomerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl RepresentativeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
