mod artifact_store;
mod clock;
mod id_generator;

pub use artifact_store::ArtifactStore;
pub use clock::Clock;
pub use id_generator::IdGenerator;
