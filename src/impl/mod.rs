// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod deliveries_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod balance_model;
        pub(crate) mod currency_model;
        pub(crate) mod customer_type_model;
        pub(crate) mod delivery_state_model;
        pub(crate) mod timestamp_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod delivery_records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod customer;
        pub(crate) mod dashboard;
        pub(crate) mod delivery_record;
        pub(crate) mod delivery_state;
        pub(crate) mod filter_criteria;
        pub(crate) mod notification_view;
        pub(crate) mod status_counts;
    }
    pub(crate) mod logic {
        pub(crate) mod delivery_initiator;
        #[cfg(test)]
        pub(crate) mod fixtures;
        pub(crate) mod notification_filter;
        pub(crate) mod notification_projector;
        pub(crate) mod record_integrity;
        pub(crate) mod record_lifecycle;
        pub(crate) mod representative_index;
        pub(crate) mod status_aggregator;
        pub(crate) mod status_classifier;
    }
    pub(crate) mod repositories {
        pub(crate) mod delivery_records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod load_records_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod dashboard_printer;
    pub(crate) mod label_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::customer::*;
        pub use crate::domain::entities::dashboard::*;
        pub use crate::domain::entities::delivery_record::*;
        pub use crate::domain::entities::delivery_state::*;
        pub use crate::domain::entities::filter_criteria::*;
        pub use crate::domain::entities::notification_view::*;
        pub use crate::domain::entities::status_counts::*;
    }
}
