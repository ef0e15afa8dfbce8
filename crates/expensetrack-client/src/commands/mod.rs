pub mod chart;
pub(crate) mod common;
pub mod entry;
pub mod export;
pub mod months;
pub mod overview;
pub mod search;
