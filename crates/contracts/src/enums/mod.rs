pub mod classification;
pub mod project_status;
