mod login;
pub use login::*;

mod fetch_user;
pub use fetch_user::*;
