//! create-abell core - scaffolding for Abell projects
//!
//! This library provides everything behind the `create-abell` binary: it
//! copies a template into a new directory, installs dependencies with the
//! chosen package manager, names the project in `package.json`, removes any
//! `.git` inherited from the template and suggests how to start the
//! dev-server.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Project resolution, template selection and
//!   copying, installer table, package.json patching, small utilities
//! - **Layer 2: Workflow Orchestration** - `CreatePlan` and `create::execute`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use create_abell_core::{create, project, templates, Config, CreatePlan, Installer};
//!
//! let config = Config::default();
//! let info = project::resolve_in(&std::env::current_dir()?, "My Site")?;
//! let template = templates::get_template(None)?;
//! let report = create::execute(&config, CreatePlan::new(info, template, Installer::Npm)).await?;
//! ```

pub mod config;
pub mod create;
pub mod installer;
pub mod package_json;
pub mod project;
pub mod templates;
pub mod utils;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Config;
pub use create::{execute, CreatePlan, CreateReport, StepOutcome};
pub use installer::{Installer, INSTALLERS};
pub use project::{ProjectError, ProjectInfo};
pub use templates::{TemplateError, TemplateSource};

#[cfg(feature = "tui")]
pub use tui::run;

/// CLI version - used in the download user agent
/// The binary passes its own version, this is the fallback
pub const DEFAULT_CLI_VERSION: &str = "0.1.0";
