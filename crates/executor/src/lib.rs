pub mod delete;

#[cfg(test)]
mod test_log;

pub use delete::*;
