use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidTimestamp, "Invalid RFC 3339 timestamp: {timestamp}.", { timestamp: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(InvalidBalance, "Invalid balance: '{value}'.", { value: &str });
define_client_error!(
    UnknownCustomerType,
    "Unknown customer type: '{value}'. Expected one of Independent, Bill-To, Chain.",
    { value: &str }
);

// Configuration errors: status taxonomy outside the defined enumeration.
define_client_error!(
    UnknownDeliveryChannel,
    "Unknown delivery channel: '{channel}'. Expected 'email' or 'mail'.",
    { channel: &str }
);
define_client_error!(
    UndefinedDeliveryStatus,
    "Delivery status '{status}' is not defined for the {channel} channel.",
    { status: &str, channel: &str }
);

// Data integrity errors: malformed delivery records.
define_client_error!(
    ConflictingDeliveryOutcome,
    "Delivery record for customer '{customer_id}' is both confirmed and failed.",
    { customer_id: &str }
);
define_client_error!(
    MissingFailureReason,
    "Delivery record for customer '{customer_id}' has a failure timestamp but no failure reason.",
    { customer_id: &str }
);
define_client_error!(
    UnexpectedFailureReason,
    "Delivery record for customer '{customer_id}' has a failure reason but no failure timestamp.",
    { customer_id: &str }
);
define_client_error!(
    InconsistentDeliveryStatus,
    "Delivery record for customer '{customer_id}' has status '{status}' but is {outcome}.",
    { customer_id: &str, status: &str, outcome: &str }
);
define_client_error!(
    DuplicateCustomerRecord,
    "More than one delivery record for customer '{customer_id}'.",
    { customer_id: &str }
);

// Lifecycle.
define_client_error!(
    InvalidDeliveryTransition,
    "Cannot apply '{event}' to the delivery record of customer '{customer_id}' (current status: {status}).",
    { event: &str, customer_id: &str, status: &str }
);

// Presentation.
define_client_error!(
    InvalidTimestampFormat,
    "Invalid timestamp format string: '{format}'.",
    { format: &str }
);
define_internal_error!(JsonExportFailed, "Failed to serialize {what} to JSON.", { what: &str });
