pub mod busy_time;
pub mod mann_whitney;
pub mod reliability;
pub mod status;
pub mod zscore;
