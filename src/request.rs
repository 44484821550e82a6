//! URL construction for GET style endpoints.

use url::Url;

use crate::Result;

/// Parse a configured base URL, making sure its path ends with `/` so that
/// joining keeps every existing segment (`.../v2` and `.../v2/` behave alike).
pub(crate) fn parse_base(base: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    if url.cannot_be_a_base() {
        return Err(crate::Error::Config(format!(
            "base URL {base} cannot carry a path"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Join `endpoint` onto `base` without query parameters.
pub(crate) fn endpoint_url(base: &Url, endpoint: &str) -> Result<Url> {
    Ok(base.join(endpoint.trim_start_matches('/'))?)
}

/// Full request URL: base + endpoint, `api_key` first, then `params` in order.
pub(crate) fn build_url(
    base: &Url,
    endpoint: &str,
    api_key: &str,
    params: &[(&str, &str)],
) -> Result<Url> {
    let mut url = endpoint_url(base, endpoint)?;
    url.query_pairs_mut()
        .append_pair("api_key", api_key)
        .extend_pairs(params);
    Ok(url)
}
