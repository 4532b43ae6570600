//! Journal name abbreviation for bibliographic entries.
//!
//! The engine works on one entry and one field per call:
//! - [`UndoableAbbreviator`] replaces a known full journal name with one of
//!   its abbreviations, optionally keeping the full name in `fjournal`
//! - [`UndoableUnabbreviator`] goes the other way
//!
//! Both read names through an [`AbbreviationLookup`] (normally a
//! [`JournalAbbreviationRepository`]), expand `@String` references through an
//! optional [`StringResolver`], and report every mutation to an
//! [`EditSink`](bibabbrev_model::EditSink) so the caller can undo it.

mod abbreviation;
mod abbreviator;
mod error;
mod preferences;
mod repository;
mod strings;
mod unabbreviator;

pub use abbreviation::{Abbreviation, AbbreviationType};
pub use abbreviator::UndoableAbbreviator;
pub use error::{JournalError, JournalResult};
pub use preferences::AbbreviationPreferences;
pub use repository::{AbbreviationLookup, JournalAbbreviationRepository};
pub use strings::{StringResolver, StringTable};
pub use unabbreviator::UndoableUnabbreviator;
