pub mod attendance_record;
pub mod session_token;
pub mod user;
