//! Choice resolution and derived views over stored field values
//!
//! A stored field value is a delimited string of selection keys. Given the
//! field's blueprint definition and an option provider, this crate resolves
//! those keys into [`Choices`] — an ordered value→text mapping — and offers
//! pure derived views over it: joining, membership tests, set difference,
//! aggregation and case transforms.
//!
//! # Architecture
//!
//! - **Provider seam**: [`OptionProvider`] turns an option source into raw
//!   option material; everything downstream is pure computation
//! - **Normalize once**: raw material collapses into one ordered map at the
//!   boundary, so resolution never branches on shape
//! - **Per-key precedence**: color override, then text match, then value
//!   match, then slug fallback for orphaned selections
pub mod choices;
pub mod collect;
pub mod error;
pub mod field;
pub mod options;
pub mod provider;
pub mod resolver;
pub mod text;

pub use choices::{Choices, KeyArgs};
pub use error::{ChoicesError, Result};
pub use field::Field;
pub use provider::{OptionProvider, StaticProvider};
pub use resolver::{resolve_color_key, resolve_keys, ChoiceResolver};
