pub mod download_request;
pub mod download_response;
pub mod login_response;
pub mod login_status;
