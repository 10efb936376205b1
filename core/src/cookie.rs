//! Cookies attached to outgoing requests.

/// A single HTTP cookie.
///
/// Only `name=value` travels on a request. The attributes are kept so cookies
/// copied from a `Set-Cookie` response can be passed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: Option<String>,
    pub domain: Option<String>,
    /// Lifetime in seconds.
    pub max_age: Option<i64>,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: None,
            domain: None,
            max_age: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    /// `name=value` as it appears in a `Cookie` request header.
    ///
    /// Bytes outside RFC 6265 are dropped from both halves, so a value can
    /// never smuggle in a second pair. A value containing a space or comma is
    /// double-quoted.
    pub fn pair(&self) -> String {
        format!("{}={}", sanitize_name(&self.name), sanitize_value(&self.value))
    }
}

fn sanitize_name(name: &str) -> String {
    name.chars().filter(|&c| is_token_char(c)).collect()
}

fn sanitize_value(value: &str) -> String {
    let cleaned: String = value.chars().filter(|&c| is_value_char(c)).collect();
    if cleaned.contains([' ', ',']) {
        format!("\"{cleaned}\"")
    } else {
        cleaned
    }
}

/// RFC 7230 `tchar`.
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

/// RFC 6265 `cookie-octet`, plus space and comma which get quoted.
fn is_value_char(c: char) -> bool {
    matches!(c, ' '..='~') && !matches!(c, '"' | ';' | '\\')
}

/// Render `cookies` as a `Cookie` header value, or `None` when there are none.
pub fn cookie_header(cookies: &[Cookie]) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    let pairs: Vec<String> = cookies.iter().map(Cookie::pair).collect();
    Some(pairs.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_do_not_leak_into_pair() {
        let cookie = Cookie::new("cookie_name", "sample_cookie_value")
            .path("/")
            .max_age(300);
        assert_eq!(cookie.pair(), "cookie_name=sample_cookie_value");
        assert_eq!(cookie.path.as_deref(), Some("/"));
        assert_eq!(cookie.max_age, Some(300));
    }

    #[test]
    fn header_joins_in_order() {
        let cookies = vec![
            Cookie::new("cookie_1", "cookie-value-1"),
            Cookie::new("cookie_2", "cookie-value-2"),
        ];
        assert_eq!(
            cookie_header(&cookies).as_deref(),
            Some("cookie_1=cookie-value-1; cookie_2=cookie-value-2")
        );
    }

    #[test]
    fn separators_in_value_are_dropped() {
        let cookie = Cookie::new("a", "x;admin=1");
        assert_eq!(cookie.pair(), "a=xadmin=1");
    }

    #[test]
    fn value_with_space_is_quoted_after_cleaning() {
        let cookie = Cookie::new("a", "x; admin=1");
        assert_eq!(cookie.pair(), r#"a="x admin=1""#);
        assert_eq!(
            cookie_header(&[cookie, Cookie::new("b", "2")]).as_deref(),
            Some(r#"a="x admin=1"; b=2"#)
        );
    }

    #[test]
    fn quotes_backslashes_and_control_bytes_are_dropped() {
        let cookie = Cookie::new("a", "\"q\\u\r\noted\"\u{7f}");
        assert_eq!(cookie.pair(), "a=quoted");
    }

    #[test]
    fn name_keeps_only_token_characters() {
        let cookie = Cookie::new("se;ss=io n\r\n", "v");
        assert_eq!(cookie.pair(), "session=v");
    }

    #[test]
    fn non_ascii_is_dropped() {
        assert_eq!(Cookie::new("café", "naïve").pair(), "caf=nave");
    }

    #[test]
    fn no_cookies_no_header() {
        assert_eq!(cookie_header(&[]), None);
    }
}
