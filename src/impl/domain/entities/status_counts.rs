#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub total: usize,
    pub delivered_or_forwarded: usize,
    pub bounced_or_incomplete: usize,
}

/// Counts over a scoped population next to the same counts over every
/// record, for comparison display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedStatusCounts {
    pub scoped: StatusCounts,
    pub global: StatusCounts,
    pub is_scoped: bool,
}
