//! Entry points for calling the client from JavaScript

use console_error_panic_hook::set_once as set_panic_hook;
use gloo::utils::format::JsValueSerdeExt;
use serde_json::Value;
use shared::utils::{
    fetch::{BearerAuth, GlooClient},
    tracing::configure_tracing_once,
};
use tracing::{error, Level};
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

use crate::{
    api::{fetch_access_token, load_current_user},
    state::UserState,
};

/// A JS object with a `set(value)` method, e.g. a svelte store
pub struct JsUserStore {
    store: JsValue,
}

impl JsUserStore {
    pub fn new(store: JsValue) -> Self {
        Self { store }
    }

    fn call_set(&self, value: &JsValue) -> Result<(), JsValue> {
        let set: Function = Reflect::get(&self.store, &JsValue::from_str("set"))?.dyn_into()?;
        set.call1(&self.store, value)?;
        Ok(())
    }
}

impl UserState<Value> for JsUserStore {
    fn set(&self, user: Option<Value>) {
        let value = match user {
            Some(user) => <JsValue as JsValueSerdeExt>::from_serde(&user).unwrap_or_else(|e| {
                error!("JsUserStore::set couldn't convert user: {e}");
                JsValue::NULL
            }),
            None => JsValue::NULL,
        };

        if let Err(e) = self.call_set(&value) {
            error!("JsUserStore::set failed: {e:?}");
        }
    }
}

fn to_js<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(js_name = initClient)]
pub fn init_client() {
    set_panic_hook();
    configure_tracing_once(Level::DEBUG);
}

/// Resolves to the access token, rejects with the error message
///
/// Plain objects are sent as json. `FormData` and `URLSearchParams` are
/// handed to fetch as they are.
#[wasm_bindgen(js_name = getAccessToken)]
pub async fn get_access_token(credentials: JsValue) -> Result<String, JsValue> {
    let client = GlooClient::from_location().map_err(to_js)?;

    fetch_access_token(&client, &credentials).await.map_err(to_js)
}

/// Puts the current user (or `null`) into `store`. Never rejects.
#[wasm_bindgen(js_name = setupUser)]
pub async fn setup_user(store: JsValue, token: Option<String>) {
    let store = JsUserStore::new(store);

    match GlooClient::from_location() {
        Ok(mut client) => {
            if token.is_some() {
                client.set_bearer_token(token);
            }
            load_current_user(&client, &store).await;
        }
        Err(e) => {
            error!("setup_user: {e}");
            store.set(None);
        }
    }
}
