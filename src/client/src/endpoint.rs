use url::Url;

use crate::error::{ClientError, Result};

/// Builds the URL for `segments` under the configured server address.
///
/// A bare `host:port` is treated as plain HTTP. Addresses that already carry
/// a scheme must use `http` or `https`; any path they carry is kept as a prefix.
pub fn endpoint_url(address: &str, segments: &[&str]) -> Result<Url> {
    let address = address.trim();
    let invalid = |reason: String| ClientError::InvalidAddress {
        address: address.to_string(),
        reason,
    };

    let parsed = if address.contains("://") {
        Url::parse(address)
    } else {
        Url::parse(&format!("http://{address}"))
    };
    let mut url = parsed.map_err(|err| invalid(err.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }

    url.path_segments_mut()
        .map_err(|_| invalid("address cannot be used as a base".to_string()))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case("127.0.0.1:7777", &["tracers"], "http://127.0.0.1:7777/tracers")]
    #[case("localhost:8081", &["tracers", "5", "events"], "http://localhost:8081/tracers/5/events")]
    #[case("http://localhost:8081", &["labels"], "http://localhost:8081/labels")]
    #[case("https://tracer.example.com/api/", &["labels"], "https://tracer.example.com/api/labels")]
    #[case(" 10.0.0.1:80 ", &["tracers", "42"], "http://10.0.0.1/tracers/42")]
    fn test_endpoint_url(#[case] address: &str, #[case] segments: &[&str], #[case] expected: &str) {
        let url = endpoint_url(address, segments).unwrap();
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("ftp://files.example.com")]
    #[case("localhost:notaport")]
    fn test_invalid_address(#[case] address: &str) {
        let err = endpoint_url(address, &["tracers"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(matches!(err, ClientError::InvalidAddress { .. }));
    }
}
