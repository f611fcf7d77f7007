//! Resource descriptors for the tracked collections

/// A collection exposed over HTTP, with its unique business key.
pub trait Resource: Send + Sync + 'static {
    /// Collection name in the document store
    const COLLECTION: &'static str;

    /// Field that must be unique within the collection
    const KEY_FIELD: &'static str;

    /// Human-readable singular name used in messages and logs
    const LABEL: &'static str;
}

/// A lending fund, unique by `name`
#[derive(Debug, Clone, Copy)]
pub struct Fund;

impl Resource for Fund {
    const COLLECTION: &'static str = "funds";
    const KEY_FIELD: &'static str = "name";
    const LABEL: &'static str = "Fund";
}

/// A njangui member, unique by `phoneNumber`
#[derive(Debug, Clone, Copy)]
pub struct Member;

impl Resource for Member {
    const COLLECTION: &'static str = "members";
    const KEY_FIELD: &'static str = "phoneNumber";
    const LABEL: &'static str = "Member";
}
