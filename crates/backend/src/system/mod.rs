pub mod initialization;
pub mod seed;
pub mod tracing;
