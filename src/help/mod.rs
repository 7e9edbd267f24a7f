// RICM reference tables printed by -H/--HELP_FOR_RICM
pub mod table;
pub mod reference;

pub use table::*;
pub use reference::*;
