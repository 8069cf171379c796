//! Concurrency Tests
//!
//! The dispatch surface holds no state besides the read-mostly configuration,
//! so checks from many threads must all complete independently.

pub mod thread_safety;
