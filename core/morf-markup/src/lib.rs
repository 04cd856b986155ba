//! Root markup handling.
//!
//! The analysis engine returns roots such as `<all_m<aa_r<aud_t<ee_j<aam`
//! where `_`, `+` and `=` mark compound structure, `-` separates
//! hyphenated groups and `~ ? ] <` carry phonetic annotations. This crate
//! turns that markup into plain tokens and a dictionary-form lemma.

pub mod decompose;
pub mod lemma;
pub mod markers;

pub use decompose::{decompose, RootTokenGroups};
pub use lemma::{build_lemma, INFINITIVE_SUFFIX};
pub use markers::{
    is_marker, is_markup_only, remove_compound, remove_phonetic, strip_compound, strip_phonetic,
    COMPOUND_MARKERS, HYPHEN, PHONETIC_MARKERS, UNDERSCORE,
};
