use crate::error::AppError;
use crate::session::interface::Session;
use crate::xml::Element;

/// Extracts the session fields from a successful `user/login` response.
///
/// The service answers with top-level `username`, `userid` and `authtoken`
/// elements; a document missing any of them is not a usable login response.
pub fn session_from_login(doc: &Element) -> Result<Session, AppError> {
    let username = required(doc, "username")?;
    let user_id = required(doc, "userid")?;
    let auth_token = required(doc, "authtoken")?;
    Ok(Session::new(username, user_id, auth_token))
}

fn required(doc: &Element, name: &str) -> Result<String, AppError> {
    match doc.child_text(name) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(AppError::Decode(format!(
            "login response is missing <{name}>"
        ))),
    }
}
