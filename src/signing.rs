//! Request signature derivation.
//!
//! The service authenticates each request with an `authsecret` parameter: the
//! MD5 digest of section, method, API key and API secret concatenated in that
//! order with no delimiter. MD5 is what the live service verifies against, so
//! the digest choice is fixed by the wire format.

/// Derives the per-request `authsecret` for an endpoint.
///
/// Pure and deterministic; computed fresh for every request since section and
/// method vary per call.
pub fn auth_secret(section: &str, method: &str, api_key: &str, api_secret: &str) -> String {
    let mut input =
        String::with_capacity(section.len() + method.len() + api_key.len() + api_secret.len());
    input.push_str(section);
    input.push_str(method);
    input.push_str(api_key);
    input.push_str(api_secret);
    format!("{:x}", md5::compute(input.as_bytes()))
}

/// Hashes a login password into the form the `user/login` endpoint expects.
///
/// The plaintext never goes on the wire, only its MD5 digest.
pub fn password_hash(password: &str) -> String {
    format!("{:x}", md5::compute(password.as_bytes()))
}
