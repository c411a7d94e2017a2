//! riff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `riff`
//! function CLI, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            riff-cli (CLI)               │
//! │  create / init / build / apply / ...    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │  (Resolver, ScaffoldService,            │
//! │   CreatePipeline)                       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │  (Filesystem, DescriptorRenderer,       │
//! │   ImageBuilder, ManifestApplier)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     riff-adapters (Infrastructure)      │
//! │  (LocalFilesystem, DockerBuilder,       │
//! │   KubectlApplier, dry-run variants)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Language registry, InitOptions,       │
//! │   Descriptor)                           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use riff_core::prelude::*;
//!
//! let resolver = Resolver::new(
//!     ResolveContext::new(std::env::current_dir()?, "0.0.6").with_user_account("me"),
//! );
//! let pipeline = CreatePipeline::new(resolver, scaffold, builder, applier)?;
//! let outcome = pipeline.create(&FunctionRequest::at("echo"), None)?;
//! println!("built {}", outcome.build.image);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplyOptions, ApplyReport, BuildOptions, BuildReport, CreateOutcome, CreatePipeline,
        ExecutionMode, FileAction, ResolveContext, Resolver, ScaffoldReport, ScaffoldService,
        ports::{DescriptorRenderer, Filesystem, ImageBuilder, ManifestApplier},
    };
    pub use crate::domain::{
        Descriptor, DescriptorKind, FunctionRequest, ImageRef, InitOptions, Language, Protocol,
        RenderContext,
    };
    pub use crate::error::{RiffError, RiffResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
