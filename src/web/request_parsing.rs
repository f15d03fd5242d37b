// Request parsing utilities for HTTP handlers

use hyper::Uri;

/// Extract a query parameter from a URI.
///
/// Returns `Some(value)` if the parameter exists, `None` otherwise. The
/// value is URL-decoded automatically.
pub fn get_query_param(uri: &Uri, key: &str) -> Option<String> {
    let query = uri.query()?;

    query
        .split('&')
        .filter_map(|param| param.split_once('='))
        .find(|(param_key, _)| *param_key == key)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_query_param_basic() {
        let uri: Uri = "/launch?rom=pitfall.bin".parse().unwrap();
        assert_eq!(get_query_param(&uri, "rom"), Some("pitfall.bin".to_string()));
    }

    #[test]
    fn test_get_query_param_url_encoded() {
        let uri: Uri = "/launch?rom=space%20invaders.bin".parse().unwrap();
        assert_eq!(
            get_query_param(&uri, "rom"),
            Some("space invaders.bin".to_string())
        );
    }

    #[test]
    fn test_get_query_param_multiple_params() {
        let uri: Uri = "/launch?user=abc&rom=adventure.bin".parse().unwrap();
        assert_eq!(
            get_query_param(&uri, "rom"),
            Some("adventure.bin".to_string())
        );
        assert_eq!(get_query_param(&uri, "user"), Some("abc".to_string()));
    }

    #[test]
    fn test_get_query_param_not_found() {
        let uri: Uri = "/launch?other=x".parse().unwrap();
        assert_eq!(get_query_param(&uri, "rom"), None);
    }

    #[test]
    fn test_get_query_param_no_query() {
        let uri: Uri = "/launch".parse().unwrap();
        assert_eq!(get_query_param(&uri, "rom"), None);
    }

    #[test]
    fn test_get_query_param_empty_value() {
        let uri: Uri = "/launch?rom=".parse().unwrap();
        assert_eq!(get_query_param(&uri, "rom"), Some("".to_string()));
    }
}
