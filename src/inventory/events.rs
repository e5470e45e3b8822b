use super::record::PartId;

/// Change notification queued by the inventory.
///
/// The host drains the queue after handling an input event and refreshes
/// whatever views depend on the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryEvent {
    PartAdded(PartId),
    SelectionChanged {
        previous: Option<PartId>,
        current: Option<PartId>,
    },
    VisibilityChanged {
        part: PartId,
        hidden: bool,
    },
    /// `eligible` is the number of kept parts after the change.
    KeptChanged {
        part: PartId,
        kept: bool,
        eligible: usize,
    },
    HoverChanged(Option<PartId>),
    Cleared,
}
