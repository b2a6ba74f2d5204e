//! Data models for the tablature engine
//!
//! All entities are immutable value objects constructed once per
//! transformation call; nothing here holds state between calls.

pub mod events;
pub mod pitch;
pub mod scale;
pub mod tablature;
pub mod tuning;

// Re-export commonly used types
pub use events::{MappedNoteEvent, NoteEvent};
pub use pitch::{semitone_interval, Pitch, PitchClass, CHROMATIC};
pub use scale::Scale;
pub use tablature::{TabRow, Tablature, BEATS_PER_MEASURE, MEASURE_COUNT, REST, TOTAL_BEATS};
pub use tuning::{StringSpec, Tuning, TuningEntry};
