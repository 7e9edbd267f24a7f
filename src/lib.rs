pub mod notation;
pub mod help;
pub mod cli;
pub mod utils;

pub use notation::*;
pub use help::*;
pub use cli::*;
pub use utils::*;
