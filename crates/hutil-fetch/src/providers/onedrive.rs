use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FetchError, Result};

static SHARE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://1drv\.ms/u/s!([A-Za-z0-9_-]{28})\?e=([A-Za-z0-9_-]{6})$")
        .expect("share link pattern is valid")
});

/// A OneDrive `1drv.ms` share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub id: String,
    pub key: String,
}

impl ShareLink {
    pub fn parse(url: &str) -> Result<Self> {
        let caps = SHARE_LINK
            .captures(url)
            .ok_or_else(|| FetchError::InvalidShareUrl(url.to_owned()))?;
        Ok(Self {
            id: caps[1].to_owned(),
            key: caps[2].to_owned(),
        })
    }

    /// Direct content URL for the shared item.
    pub fn content_url(&self) -> String {
        format!("https://api.onedrive.com/v1.0/shares/s!{}/root/content", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "AbCdEfGhIjKlMnOpQrStUvWxYz01";

    #[test]
    fn parses_share_link() {
        let link = ShareLink::parse(&format!("https://1drv.ms/u/s!{ID}?e=a1B2_c")).unwrap();
        assert_eq!(link.id, ID);
        assert_eq!(link.key, "a1B2_c");
        assert_eq!(
            link.content_url(),
            format!("https://api.onedrive.com/v1.0/shares/s!{ID}/root/content")
        );
    }

    #[test]
    fn rejects_wrong_lengths_and_hosts() {
        for url in [
            format!("https://1drv.ms/u/s!{ID}x?e=a1B2_c"),
            format!("https://1drv.ms/u/s!{ID}?e=a1B2"),
            format!("http://1drv.ms/u/s!{ID}?e=a1B2_c"),
            format!("https://example.com/u/s!{ID}?e=a1B2_c"),
            "https://1drv.ms/u/s!short?e=a1B2_c".to_string(),
        ] {
            assert!(
                matches!(ShareLink::parse(&url), Err(FetchError::InvalidShareUrl(_))),
                "{url}"
            );
        }
    }
}
