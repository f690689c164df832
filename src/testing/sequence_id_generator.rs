use std::cell::Cell;

use crate::domain::XmiId;
use crate::ports::IdGenerator;

/// Deterministic ids `_0000000000000000000001`, `_0000000000000000000002`, ...
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    issued: Cell<u64>,
}

impl SequenceIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id returned by the `n`th call (1-based).
    pub fn nth(n: u64) -> XmiId {
        XmiId::from_body(&format!("{:022}", n))
    }

    pub fn issued(&self) -> u64 {
        self.issued.get()
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> XmiId {
        let n = self.issued.get() + 1;
        self.issued.set(n);
        Self::nth(n)
    }
}
