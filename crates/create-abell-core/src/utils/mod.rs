//! Small helpers shared by the create flow
//!
//! - Leveled, colorized console output
//! - Display paths relative to the working directory
//! - Subprocess execution
//! - Recursive directory removal

pub mod fs;
pub mod log;
pub mod paths;
pub mod process;

pub use fs::delete_dir;
pub use paths::{relative, relative_to};
pub use process::{run, run_program};

/// Text emphasis helpers used inside log messages
pub mod colors {
    use colored::Colorize;

    pub fn bold(text: impl AsRef<str>) -> String {
        text.as_ref().bold().to_string()
    }
}
