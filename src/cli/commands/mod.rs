pub mod check;
mod command_result;
pub mod helper;
pub mod init;
pub mod inspect;
pub mod render;

pub use command_result::*;
