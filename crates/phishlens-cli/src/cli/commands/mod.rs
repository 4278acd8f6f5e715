//! CLI command handlers. Each command is in its own file.

mod completions;
mod features;
mod load;
mod train;

pub use completions::run_completions;
pub use features::run_features;
pub use load::run_load;
pub use train::run_train;
