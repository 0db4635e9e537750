pub mod form_input;
pub mod format;
pub mod funnel;
pub mod metrics;
