pub mod init_document;
pub mod user;

pub use init_document::*;
pub use user::*;
