use serpkit_core::{DecodeError, Error, QueryString, get_param, html_decode};

/// Verify a parameter survives the trip from a full page URL.
#[test]
fn test_param_from_page_url() {
    let query = QueryString::parse_url("https://docs.example.org/search.html?q=hello+world&x=1")
        .unwrap();

    assert_eq!(get_param(&query, "q").unwrap().as_deref(), Some("hello world"));
    assert_eq!(get_param(&query, "x").unwrap().as_deref(), Some("1"));
    assert_eq!(get_param(&query, "missing").unwrap(), None);
}

/// Verify the escaped parameter decodes back to what the user typed.
#[test]
fn test_escaped_param_decodes_back() {
    let query = QueryString::new("q=%3Cb%3E+%26+%27%2F%27");

    let escaped = get_param(&query, "q").unwrap().unwrap();

    assert_eq!(escaped, "&lt;b&gt; &amp; &#39;&#x2F;&#39;");
    assert_eq!(html_decode(&escaped), "<b> & '/'");
}

/// Verify a bad escape converts into the top-level error.
#[test]
fn test_decode_error_converts() {
    let query = QueryString::new("q=%G1");

    let err: Error = get_param(&query, "q").unwrap_err().into();

    assert!(matches!(
        err,
        Error::Decode(DecodeError::MalformedEscape { position: 0 })
    ));
}
