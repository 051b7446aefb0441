use web_sys::Location;

use crate::api::error::FrontendError;

fn location<T>() -> Result<Location, FrontendError<T>> {
    Ok(web_sys::window()
        .ok_or(FrontendError::Config { message: "No window".to_string() })?
        .location())
}

/// Gets the site host with no protocol or path
pub fn host<T>() -> Result<String, FrontendError<T>> {
    location()?
        .host()
        .map_err(|e| FrontendError::Config { message: format!("location.host: {e:?}") })
}

/// Gets the protocol (http/https) including a trailing ':'
pub fn protocol<T>() -> Result<String, FrontendError<T>> {
    location()?
        .protocol()
        .map_err(|e| FrontendError::Config { message: format!("location.protocol: {e:?}") })
}

/// Gets the fully qualified URL to the site root including protocol
pub fn root_url<T>() -> Result<String, FrontendError<T>> {
    let protocol = protocol()?;
    let host = host()?;

    Ok(format!("{protocol}//{host}"))
}
