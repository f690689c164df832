mod fixed_clock;
mod memory_artifact_store;
mod sequence_id_generator;

pub use fixed_clock::FixedClock;
pub use memory_artifact_store::MemoryArtifactStore;
pub use sequence_id_generator::SequenceIdGenerator;
