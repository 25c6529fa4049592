//! Build configuration resolver for stagehand
//!
//! Turns a raw, partially-specified configuration tree plus the caller's
//! selections into one validated, path-absolute [`ResolvedConfig`]:
//!
//! ```text
//!   RawConfig + SelectedOptions
//!               |
//!     root -> project -> stage/key -> output
//!               |
//!         ResolvedConfig
//! ```
//!
//! Each step either fills in its part of the result or fails with a
//! [`ConfigError`]; no partial result is ever returned. The only side
//! effects are read-only existence checks through [`stagehand_fs::FileSystem`].
//!
//! # Example
//!
//! ```no_run
//! use stagehand_core::{Resolver, SelectedOptions};
//! use stagehand_meta::{CommandTable, ConfigLoader};
//!
//! # fn main() -> stagehand_core::Result<()> {
//! let raw = ConfigLoader::new().load(&ConfigLoader::locate(None)?)?;
//! let table = CommandTable::with_builtins();
//! let mut options = SelectedOptions::working().with_project("project1");
//! if let Some(package) = table.get("package") {
//!     options = options.for_command(package);
//! }
//! let resolved = Resolver::new(&raw, &options).resolve()?;
//! println!("{}", resolved.project.directory);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod options;
pub mod resolver;

pub use error::{ConfigError, Error, Result};
pub use options::{SelectedOptions, Source};
pub use resolver::{
    OutputKind, OutputSpec, ResolvedConfig, ResolvedKey, ResolvedProject, ResolvedStage, Resolver,
    resolve,
};
