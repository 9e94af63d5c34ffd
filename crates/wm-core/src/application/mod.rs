//! Application layer for WM.
//!
//! This layer contains:
//! - **GenerateService**: the render-and-write use case
//! - **Ports**: interface definitions (traits) for external dependencies
//!
//! Orchestration only; the substitution and descriptor rules live in
//! `crate::domain`.

pub mod generate;
pub mod ports;

pub use generate::GenerateService;
pub use ports::{Filesystem, TemplateLoader};
