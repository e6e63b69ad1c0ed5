//! Cleanarch Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the cleanarch
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          cleanarch-cli (CLI)            │
//! │   (prompt, config, logging, output)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (Materializer)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │              (Filesystem)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    cleanarch-adapters (Infrastructure)  │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (LayoutDescriptor, ProjectName, Plan)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cleanarch_core::prelude::*;
//!
//! let materializer = Materializer::new(filesystem, &CLEAN_ARCHITECTURE, overrides)?;
//! let name = ProjectName::new("Shop")?;
//! materializer.materialize(&name, ".")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Materializer, MaterializeSummary, ports::Filesystem};
    pub use crate::domain::{
        CLEAN_ARCHITECTURE, ContentOverride, DEFAULT_PROJECT_NAME, LayoutDescriptor, LayoutEntry,
        ProjectName, ScaffoldPlan,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
