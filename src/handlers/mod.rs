pub mod comments;
pub mod health;
pub mod users;

pub use comments::*;
pub use health::*;
pub use users::*;
