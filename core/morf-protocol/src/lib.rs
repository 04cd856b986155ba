#![no_std] // Shared with the wasm platform crate

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod analysis;
pub mod morphology;
pub mod model;

// Re-export core types for convenience
pub use analysis::{CanonicalAnalysis, RawAnalysis, WordResult};
pub use model::{GuessRule, Lexicon, LexiconEntry};
pub use morphology::{PartOfSpeech, UnknownTag};
