//! Service layer module
//!
//! Contains the Revcontent client seam (live and mocked variants) and the
//! orchestration runner

pub mod client;
pub mod mock;
pub mod runner;

pub use client::{HttpRevcontentClient, RevcontentClient};
pub use mock::{MockRevcontentClient, RecordedCall};
pub use runner::{run, RunReport};
