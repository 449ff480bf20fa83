pub mod parse_service;
pub mod report_service;
pub mod session_service;
pub mod upload_service;
