//! Generation outputs shared by every target language.
//!
//! - [`DependencyManager`] - Import/include token tracking and deduplication

mod dependencies;

pub use dependencies::DependencyManager;
