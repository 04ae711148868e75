// Core modules
pub mod config;
pub mod snippet;
pub mod parse;
pub mod scope;
pub mod collection;
pub mod render;
pub mod pipeline;

// CLI surface (thin; the binary only wires the logger and calls run())
pub mod cli;

// Convenience re-exports
pub use collection::Collection;
pub use config::ConvertConfig;
pub use parse::{parse_snippet, parse_str, Reject};
pub use pipeline::{read_dir, run, ReadStats, RunReport};
pub use render::write_dir;
pub use snippet::SnippetRecord;
