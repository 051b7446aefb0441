use shared::{
    api::{self, payloads::TokenResponse},
    utils::fetch::{HttpClient, ToRequestBody},
};
use tracing::debug;

/// Exchanges login credentials for an access token
///
/// Makes exactly one `POST auth/access-token` with `credentials` as the body,
/// encoded however `credentials` asks to be sent, and returns the `access_token` field of the response. Whatever error the
/// client produces (transport, status or a body without `access_token`) is
/// handed back unchanged.
pub async fn fetch_access_token<C, B>(client: &C, credentials: &B) -> Result<String, C::Error>
where
    C: HttpClient,
    B: ToRequestBody + ?Sized,
{
    debug!("fetch_access_token::post");
    let token: TokenResponse = client.post(api::Auth::AccessToken.path(), credentials).await?;

    debug!("fetch_access_token::ok (token_type: {})", token.token_type);
    Ok(token.access_token)
}
