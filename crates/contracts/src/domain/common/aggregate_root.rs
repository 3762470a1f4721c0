use crate::shared::entity_registry::EntityKind;

/// Root record of an admin entity as the API returns it.
///
/// Instance methods describe one record; the associated functions carry the
/// static metadata shown in tabs, buttons and confirm dialogs.
pub trait AggregateRoot {
    // ============================================================================
    // Instance data
    // ============================================================================

    /// Record id (`_id`), empty for a record that was never saved.
    fn id(&self) -> &str;

    /// Human readable label of the record.
    fn description(&self) -> &str;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Aggregate index, e.g. "a001".
    fn aggregate_index() -> &'static str;

    fn kind() -> EntityKind;

    /// Singular UI name.
    fn element_name() -> &'static str {
        Self::kind().element_name()
    }

    /// Plural UI name used as list tab title.
    fn list_name() -> &'static str;
}
