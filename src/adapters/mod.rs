pub mod artifact_filesystem;
pub mod dependency_files;
pub mod random_id_generator;
pub mod system_clock;
pub mod templates;

pub use artifact_filesystem::FilesystemArtifactStore;
pub use random_id_generator::RandomIdGenerator;
pub use system_clock::SystemClock;
