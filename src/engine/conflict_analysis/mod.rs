//! Contains the interface between conflict analysis and the engines which generalise a conflict
//! core, together with a reference implementation of the core.
mod conflict_core;
mod inference_engine;

pub use conflict_core::Conflict;
pub use conflict_core::ConflictCore;
pub use inference_engine::InferenceEngine;
