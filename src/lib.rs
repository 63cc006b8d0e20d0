// src/lib.rs
//! Skill tenure extraction and ranking for an archived profile page

/// Application log line, forwarded to the matching `tracing` macro
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}

pub mod analysis;
pub mod config;
pub mod core;
pub mod extraction;
pub mod pipeline;
pub mod types;

pub use config::PipelineConfig;
pub use pipeline::Pipeline;
