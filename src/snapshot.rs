//! Page snapshots.
//!
//! A [`PageSnapshot`] is the parsed document every extractor reads, together
//! with the URL it was loaded from. Extractors take it by shared reference
//! and never modify it.

use dom_query::Document;
use url::Url;

use crate::dom;
use crate::encoding;
use crate::url_utils;

/// A parsed page plus the URL used as its base for link resolution.
pub struct PageSnapshot {
    document: Document,
    url: Option<Url>,
}

impl PageSnapshot {
    /// Parse an HTML string loaded from `url`.
    ///
    /// An unparseable or relative `url` leaves the snapshot without a base;
    /// relative links are then reported as written.
    #[must_use]
    pub fn parse(html: &str, url: &str) -> Self {
        Self {
            document: dom::parse(html),
            url: url_utils::parse_absolute(url),
        }
    }

    /// Decode raw HTML bytes using their declared charset, then parse.
    #[must_use]
    pub fn from_bytes(html: &[u8], url: &str) -> Self {
        Self::parse(&encoding::decode_html(html), url)
    }

    /// Wrap an already parsed document.
    #[must_use]
    pub fn from_document(document: Document, url: Option<Url>) -> Self {
        Self { document, url }
    }

    /// The parsed document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The URL the document was loaded from.
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Base URL for relative links: the first `<base href>` resolved against
    /// the document URL, else the document URL.
    #[must_use]
    pub fn base_url(&self) -> Option<Url> {
        let declared = dom::first(&self.document, "base[href]")
            .and_then(|base| dom::get_attribute(&base, "href"));

        match declared {
            Some(href) => {
                let href = href.trim();
                match &self.url {
                    Some(url) => url.join(href).ok().or_else(|| Some(url.clone())),
                    None => url_utils::parse_absolute(href),
                }
            }
            None => self.url.clone(),
        }
    }

    /// Resolve an `href` attribute value against [`Self::base_url`].
    #[must_use]
    pub fn resolve(&self, href: &str) -> String {
        url_utils::resolve_href(href, self.base_url().as_ref())
    }
}

impl std::fmt::Debug for PageSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageSnapshot")
            .field("url", &self.url.as_ref().map(Url::as_str))
            .finish_non_exhaustive()
    }
}
