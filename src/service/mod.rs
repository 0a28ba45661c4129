pub mod classifier;
pub mod entry_run;
