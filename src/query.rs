use crate::Result;
use crate::utils::get_location;

/// Value of the `name` parameter in a `?a=1&b=2` query string.
///
/// The first pair whose key is `name` wins, even if it has no value.
/// Values are returned as written: nothing is percent-decoded.
pub fn get_url_parameter(search: &str, name: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .map(|pair| pair.split('='))
        .find_map(|mut pair| {
            if pair.next() == Some(name) {
                Some(pair.next().map(str::to_owned))
            } else {
                None
            }
        })
        .flatten()
}

/// Read a parameter from the current page URL.
pub fn get_page_parameter(name: &str) -> Result<Option<String>> {
    let search = get_location()?.search()?;
    Ok(get_url_parameter(&search, name))
}
