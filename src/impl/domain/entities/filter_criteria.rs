use super::{
    customer::{CustomerType, RepresentativeId},
    delivery_state::{DeliveryChannel, NormalizedStatus},
};

/// Conjunctive filter over notification views. Absent criteria match
/// everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of customer name, customer number, email or
    /// representative name.
    pub search_text: Option<String>,
    pub status: Option<NormalizedStatus>,
    pub representative_id: Option<RepresentativeId>,
    pub channel: Option<DeliveryChannel>,
    pub customer_type: Option<CustomerType>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(self, text: impl Into<String>) -> Self {
        Self {
            search_text: Some(text.into()),
            ..self
        }
    }

    pub fn status(self, status: NormalizedStatus) -> Self {
        Self {
            status: Some(status),
            ..self
        }
    }

    pub fn representative(self, id: RepresentativeId) -> Self {
        Self {
            representative_id: Some(id),
            ..self
        }
    }

    pub fn channel(self, channel: DeliveryChannel) -> Self {
        Self {
            channel: Some(channel),
            ..self
        }
    }

    pub fn customer_type(self, customer_type: CustomerType) -> Self {
        Self {
            customer_type: Some(customer_type),
            ..self
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
