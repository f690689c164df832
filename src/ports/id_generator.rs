use crate::domain::XmiId;

/// Port for producing element identifiers.
pub trait IdGenerator {
    /// Produce the next identifier. Successive calls are independent.
    fn next_id(&self) -> XmiId;
}
