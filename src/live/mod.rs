//! Live-Filter Module
//!
//! Search-as-you-type over the resident snapshot.
//!
//! ## Overview
//! The live surface re-filters on every query change, synchronously and
//! entirely locally: no request leaves the process per keystroke, no
//! debounce timer is involved, and no partial results are cached between
//! keystrokes. The full match set is recomputed from the snapshot each
//! time, which is acceptable for a corpus of this size; a larger corpus
//! would need an index in front of the linear scan.

pub mod controller;
