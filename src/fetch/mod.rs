use encoding_rs::WINDOWS_1250;
use reqwest::Client;
use tracing::{instrument, Level};

use crate::error::Error;

pub fn make_client() -> reqwest::Client {
    Client::builder()
        .gzip(true)
        .build()
        .expect("client creation should succeed")
}

#[instrument(skip(client), level = Level::DEBUG)]
pub async fn menu_page(client: &reqwest::Client) -> crate::Result<String> {
    static URL: &str = "https://www.menicka.cz/4125-bistro-pekarka.html";
    let start = std::time::Instant::now();
    let response = client.get(URL).send().await?;
    let bytes = response.bytes().await?;
    log::debug!(
        "Got {} bytes of menu page in \t {:?}",
        bytes.len(),
        start.elapsed()
    );
    decode_page(&bytes)
}

/// The page is windows-1250 regardless of what the response headers claim,
/// so the body is taken as raw bytes and decoded by hand.
fn decode_page(bytes: &[u8]) -> crate::Result<String> {
    let (text, _, had_errors) = WINDOWS_1250.decode(bytes);
    if had_errors {
        return Err(Error::Decode("menu page is not valid windows-1250"));
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_czech_bytes() {
        let decoded = decode_page(b"Hov\xECz\xED v\xFDvar 35 K\xE8").unwrap();
        assert_eq!(decoded, "Hovězí vývar 35 Kč");
    }

    #[test]
    fn test_decode_ascii_passthrough() {
        let decoded = decode_page(b"daily menu").unwrap();
        assert_eq!(decoded, "daily menu");
    }

    #[test]
    fn test_decode_rejects_undefined_bytes() {
        let err = decode_page(b"men\x81").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Decode error: menu page is not valid windows-1250"
        );
    }
}
