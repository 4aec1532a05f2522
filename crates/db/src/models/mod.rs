//! Row models. Validated inputs come from `diary_core::item`.

pub mod item;
