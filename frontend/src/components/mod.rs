pub mod detection_view;
pub mod diagnosis_view;
pub mod footer;
pub mod handlers;
pub mod header;
pub mod reset;
pub mod results;
pub mod sections;
pub mod upload_section;
pub mod utils;
