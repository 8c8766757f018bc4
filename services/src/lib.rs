pub mod auth;
pub mod claim;
pub mod directory;
pub mod error;
pub mod report;
pub mod rotation;
pub mod scanner;
pub mod session;
pub mod token;
