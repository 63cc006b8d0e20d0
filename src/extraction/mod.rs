// src/extraction/mod.rs
//! Turns the archived profile markup into job records grouped by employer

pub mod date_range;
pub mod experience;
pub mod fields;
pub mod rules;
pub mod skills;

pub use date_range::{Clock, DateRangeResolver, FixedClock, SystemClock};
pub use experience::ExperienceExtractor;
pub use fields::{FieldExtractor, JobDraft, JobField};
pub use rules::{FieldRule, SelectorRule};
pub use skills::{strip_label, SkillNormalizer};
