pub mod add;
pub mod backup;
pub mod calculator;
pub mod company;
pub mod del;
pub mod dictation;
pub mod log;
pub mod photo;
pub mod report;
pub mod state;
pub mod validate;
