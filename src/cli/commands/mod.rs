pub mod add;
pub mod backup;
pub mod company;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod report;
