//! Guidance content adapters.
//!
//! - `yaml_loader` - builds a `GuidanceRegistry` from an authored YAML file

mod yaml_loader;

pub use yaml_loader::{load_registry_from_path, load_registry_from_str, ContentLoadError};
