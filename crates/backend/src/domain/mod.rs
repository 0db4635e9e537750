pub mod a001_project;
pub mod a002_content;
pub mod a003_campaign;
