// src/application/ports/mod.rs
pub mod media;
pub mod time;
pub mod util;

// Trait-object names used where adapters are injected as `Arc<...>`.
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type MediaStorePort = dyn media::MediaStore;
