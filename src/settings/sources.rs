//! Settings sources, applied in the order listed.

pub mod environment;
pub mod global_file;
pub mod local_file;
