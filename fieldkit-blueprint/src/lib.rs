//! Blueprint schema and option-source definitions
//!
//! `fieldkit-blueprint` is a standalone, schema-only crate. A blueprint
//! describes the fields of one content type; each field may carry an option
//! source saying where its selectable choices come from. The crate knows
//! nothing about stored field values or how choices are resolved —
//! `fieldkit-choices` builds on top of it.
//!
//! # Architecture
//!
//! - **Schema-only**: Owns field definitions and option sources, not values
//! - **YAML on disk**: One `.yaml` file per blueprint, loaded read-only
//! - **Nesting-aware**: Structure fields carry their children's definitions,
//!   so nested fields resolve through their parent's node

pub mod error;
pub mod registry;
pub mod types;

pub use error::{BlueprintError, Result};
pub use registry::BlueprintRegistry;
pub use types::{Blueprint, FieldDef, FieldType, OptionList, OptionSource, SelectOption};
