use reqwest::Url;

use crate::error::CoreError;

pub(super) fn parse_connection(connection: &str) -> Result<String, CoreError> {
    let parsed = Url::parse(connection).map_err(|e| {
        CoreError::Config(format!(
            "invalid node URL `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(connection.to_owned()),
        other => Err(CoreError::Config(format!(
            "unsupported node URL scheme `{other}`; expected http or https"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_connection_http_url() {
        let parsed = parse_connection("http://127.0.0.1:8545").expect("should parse");
        assert_eq!(parsed, "http://127.0.0.1:8545");
    }

    #[test]
    fn parse_connection_https_provider_url() {
        let parsed =
            parse_connection("https://mainnet.example.io/v2/key").expect("should parse");
        assert_eq!(parsed, "https://mainnet.example.io/v2/key");
    }

    #[test]
    fn parse_connection_invalid_scheme() {
        let err = parse_connection("ws://example.com").expect_err("must reject ws");
        assert!(err.to_string().contains("unsupported node URL scheme"));
    }

    #[test]
    fn parse_connection_not_a_url() {
        assert!(parse_connection("not a url").is_err());
    }
}
