pub mod cli;
pub mod document;
pub mod emit;
pub mod jobs;
pub mod matrix;
pub mod preamble;
pub mod report;

// Convenience re-exports (optional, but nice)
pub use document::render_document;
pub use emit::Emitter;
pub use matrix::{Matrix, OsFamily, PlatformEntry, Stage};
pub use preamble::Preamble;
