pub mod cli;
pub mod logging;
pub mod storage;

pub use cli::{run, Cli};
