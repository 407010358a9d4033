pub mod junk_file;
pub mod scan_result;
pub mod deletion;

pub use junk_file::*;
pub use scan_result::*;
pub use deletion::*;
