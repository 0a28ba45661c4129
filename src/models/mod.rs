pub mod entry;
pub mod holiday;
