// file: src/utils/mod.rs
// description: shared utility module exports
// reference: support functionality

pub mod logging;
