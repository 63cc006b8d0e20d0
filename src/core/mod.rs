// src/core/mod.rs
pub mod fs_ops;

pub use fs_ops::FsOps;
