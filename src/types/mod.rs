// src/types/mod.rs
pub mod experience;
pub mod view;

pub use experience::{ExperienceByEmployer, FieldValue, JobRecord, Months, SkillSet, NOT_AVAILABLE};
pub use view::{RankedView, SkillDuration, SkillView};
