//! Guidance module - domain-keyed legal guidance and flow-stage progress.
//!
//! # Components
//!
//! - `GuidanceRegistry` - immutable domain → `GuidanceBundle` table with a default
//! - `progress` - clock-driven, stateless active-stage computation
//! - `FlowLayoutEngine` - positions and edges for the flow diagram
//! - `GuidanceSynthesizer` - one call returning all of the above, consistently
//!
//! # Data Flow
//!
//! ```text
//! classified domain ──► GuidanceSynthesizer ──► GuidanceRegistry::lookup
//!                                        └────► FlowLayoutEngine::layout
//! render tick ──► StageProgressClock ──► active stage index
//! ```

mod bundle;
mod content;
mod errors;
mod layout;
mod progress;
mod registry;
mod synthesizer;

pub use bundle::{Glossary, GuidanceBundle, TimelineEntry};
pub use content::{builtin_registry, DEFAULT_DOMAIN};
pub use errors::{BundleError, GuidanceError};
pub use layout::{Edge, FlowLayoutEngine, Position, StageLayout};
pub use progress::{
    active_index, stage_progress, StageProgress, StageProgressClock, DEFAULT_STAGE_PERIOD,
};
pub use registry::{GuidanceLookup, GuidanceRegistry, RegistryBuilder};
pub use synthesizer::{GuidanceSynthesizer, SynthesizedGuidance};
