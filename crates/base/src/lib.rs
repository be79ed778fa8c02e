mod epoch;
pub use epoch::*;

pub mod logging;
pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};

// Re-export so downstream crates can use base::log::*
pub use log;

mod vec2;
pub use vec2::*;
