pub mod fix;
pub mod init;
pub mod validate;
