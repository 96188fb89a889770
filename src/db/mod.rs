pub mod database;
pub mod info;
pub mod statement;
pub mod status;

pub use database::{Database, OpenOptions};
pub use statement::Stmt;
pub use status::{ResultStatus, describe_code};
