//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `riff-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory listing and descriptor writes
//!   - `DescriptorRenderer`: per-language descriptor templates
//!   - `ImageBuilder`: container build engine
//!   - `ManifestApplier`: cluster apply engine
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by `CreatePipeline`)

pub mod output;

pub use output::{DescriptorRenderer, Filesystem, ImageBuilder, ManifestApplier};

#[cfg(test)]
pub use output::{MockDescriptorRenderer, MockImageBuilder, MockManifestApplier};
