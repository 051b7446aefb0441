mod user;
pub use user::*;

mod login;
pub use login::*;
