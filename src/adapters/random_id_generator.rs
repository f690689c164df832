use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::domain::XmiId;
use crate::domain::identifier::XMI_ID_RANDOM_LEN;
use crate::ports::IdGenerator;

/// Draws ids from the thread-local RNG: `_` plus 22 random `[A-Za-z0-9]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> XmiId {
        let body: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(XMI_ID_RANDOM_LEN)
            .map(char::from)
            .collect();
        XmiId::from_body(&body)
    }
}
