//! WM Core - template resolution and rendering engine.
//!
//! This crate holds everything that does not touch the outside world directly:
//! the template descriptor model, the substitution engine, and the generation
//! service. All I/O flows through the ports in [`application::ports`], which
//! the `wm-adapters` crate implements.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              wm-cli (CLI)               │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   TemplateResolver (wm-adapters)        │
//! │   ordered candidate search              │
//! └──────────────────┬──────────────────────┘
//!                    │ delegates to
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   TemplateLoader port (this crate)      │
//! │   DirectoryLoader / EmbeddedLoader      │
//! └──────────────────┬──────────────────────┘
//!                    │ produces
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   ResolvedTemplate → GenerateService    │
//! │   render each file, write to dest       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every invocation builds its own [`domain::ResolvedTemplate`] and writes to
//! its own destination; there is no cache and no shared mutable state.

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService,
        ports::{Filesystem, TemplateLoader},
    };
    pub use crate::domain::{
        CompiledTemplate, ResolvedTemplate, SubstitutionContext, TemplateManifest,
    };
    pub use crate::error::{WmError, WmResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
