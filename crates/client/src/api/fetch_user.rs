use std::fmt::Display;

use serde::de::DeserializeOwned;
use shared::{api, utils::fetch::HttpClient};
use tracing::debug;

use crate::state::UserState;

/// Loads the logged in user into `state`
///
/// Makes exactly one `GET users/me` and calls `state.set` exactly once: with
/// the profile on success, with `None` on any failure. Never fails itself.
pub async fn load_current_user<C, S, U>(client: &C, state: &S)
where
    C: HttpClient,
    C::Error: Display,
    S: UserState<U> + ?Sized,
    U: DeserializeOwned,
{
    debug!("load_current_user::get");
    match client.get::<U>(api::Object::CurrentUser.path()).await {
        Ok(user) => {
            debug!("load_current_user::ok");
            state.set(Some(user));
        }
        // Unreachable server, bad token and malformed body all mean logged out
        Err(e) => {
            debug!("load_current_user::err, clearing user: {e}");
            state.set(None);
        }
    }
}
