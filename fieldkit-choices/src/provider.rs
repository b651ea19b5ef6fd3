//! The option-provider seam.
//!
//! Resolution never fetches option material itself. A provider turns an
//! option source into a raw option list; everything downstream of that
//! call is pure computation.

use async_trait::async_trait;
use fieldkit_blueprint::{OptionList, OptionSource};

use crate::error::{ChoicesError, Result};

/// Resolves a field's option source into raw option material.
#[async_trait]
pub trait OptionProvider: Send + Sync {
    async fn options(&self, source: &OptionSource) -> Result<OptionList>;
}

/// Provider for blueprints whose options are defined inline.
///
/// Dynamic sources (query, api, computed) are outside its reach and fail
/// with [`ChoicesError::UnresolvedSource`].
#[derive(Debug, Default)]
pub struct StaticProvider;

#[async_trait]
impl OptionProvider for StaticProvider {
    async fn options(&self, source: &OptionSource) -> Result<OptionList> {
        match source {
            OptionSource::Static { options } => Ok(options.clone()),
            other => Err(ChoicesError::UnresolvedSource { kind: other.kind() }),
        }
    }
}
