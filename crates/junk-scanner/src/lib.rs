pub mod resolver;
pub mod scanner;
pub mod filters;

#[cfg(test)]
mod test_log;

pub use resolver::{resolve_directory, validate_directory};
pub use scanner::{scan_junk, ScanOptions};
pub use filters::*;
pub use tmp_eraser_domain::{JunkFile, JunkScan};
