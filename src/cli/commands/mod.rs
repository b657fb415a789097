pub mod check;
mod command_result;
pub mod context;
pub mod export;
pub mod helper;
pub mod import;
pub mod init;

pub use command_result::*;
