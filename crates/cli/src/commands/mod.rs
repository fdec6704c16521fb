pub mod chat;
pub mod init;
pub mod knowledge;
pub mod serve;
