use std::{fmt::Display, marker::PhantomData};

use serde::de::DeserializeOwned;
use shared::{
    model::User,
    utils::fetch::{BearerAuth, HttpClient, ToRequestBody},
};
use tracing::debug;

use crate::{
    api::{fetch_access_token, load_current_user},
    state::UserState,
};

/// A client and the state it keeps the current user in
pub struct Session<C, S, U = User> {
    client: C,
    state: S,
    user: PhantomData<fn() -> U>,
}

impl<C, S, U> Session<C, S, U> {
    pub fn new(client: C, state: S) -> Self {
        Self { client, state, user: PhantomData }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

impl<C, S, U> Session<C, S, U>
where
    C: HttpClient + BearerAuth,
    C::Error: Display,
    S: UserState<U>,
    U: DeserializeOwned,
{
    /// Fetches a token, uses it for every later request and loads the user
    ///
    /// If the token can't be fetched the error is returned and neither the
    /// client nor the state are touched.
    pub async fn login<B>(&mut self, credentials: &B) -> Result<String, C::Error>
    where
        B: ToRequestBody + ?Sized,
    {
        debug!("Session::login");
        let token = fetch_access_token(&self.client, credentials).await?;
        self.client.set_bearer_token(Some(token.clone()));

        load_current_user(&self.client, &self.state).await;
        Ok(token)
    }

    pub async fn refresh_user(&self) {
        debug!("Session::refresh_user");
        load_current_user(&self.client, &self.state).await;
    }

    /// Forgets the token and the user. Nothing is sent to the server.
    pub fn logout(&mut self) {
        debug!("Session::logout");
        self.client.set_bearer_token(None);
        self.state.set(None);
    }
}
