// RICM notation: risk levels, intentions and the commit line they produce
pub mod risk_level;
pub mod intention;
pub mod commit_request;

pub use risk_level::*;
pub use intention::*;
pub use commit_request::*;

/// Code returned for names outside the closed risk/intention sets
pub const FALLBACK_CODE: char = ' ';
