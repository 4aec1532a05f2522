pub mod diagnostics;
pub mod item;
