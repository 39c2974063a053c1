use log::{info, warn};

use crate::error::ExportError;
use crate::lookup::ContactLookup;
use crate::records::{sample_keyword_listings, ContactResults, KeywordListing};
use crate::table::Table;

pub const KEYWORD_PENDING_NOTICE: &str = "Feature under development.";
pub const EMPTY_URL_WARNING: &str = "Please enter a valid URL.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// Advisory message produced by a trigger. Never blocks the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: &str) -> Self {
        Notice { level: NoticeLevel::Info, message: message.to_string() }
    }

    pub fn warning(message: &str) -> Self {
        Notice { level: NoticeLevel::Warning, message: message.to_string() }
    }
}

/// Datasets owned by one browser session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    pub keyword_listings: Vec<KeywordListing>,
    pub contacts: ContactResults,
}

impl Default for SearchSession {
    fn default() -> Self {
        SearchSession {
            keyword_listings: sample_keyword_listings(),
            contacts: ContactResults::default(),
        }
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword_table(&self) -> Table {
        Table::from_rows(&self.keyword_listings)
    }

    pub fn contact_table(&self) -> Table {
        self.contacts.to_table()
    }
}

/// Handles the search triggers and exports for a session.
pub struct ResultPresenter<L: ContactLookup> {
    lookup: L,
}

impl<L: ContactLookup> ResultPresenter<L> {
    pub fn new(lookup: L) -> Self {
        ResultPresenter { lookup }
    }

    /// Keyword search is not implemented; the listings are left untouched.
    pub fn search_by_keyword(&self, _session: &SearchSession, keyword: &str, location: &str) -> Notice {
        info!("Keyword search requested: '{}' in '{}'", keyword, location);
        Notice::info(KEYWORD_PENDING_NOTICE)
    }

    /// Replaces the whole contact dataset with the lookup result for `url`.
    /// An empty `url` only yields a warning.
    pub fn search_by_url(&self, session: &mut SearchSession, url: &str) -> Option<Notice> {
        if url.is_empty() {
            warn!("URL search triggered without a URL");
            return Some(Notice::warning(EMPTY_URL_WARNING));
        }

        let extracted = self.lookup.lookup(url);
        session.contacts = ContactResults::Extracted(vec![extracted]);
        info!("Contact results replaced for: {}", url);
        None
    }

    pub fn export_keyword_csv(&self, session: &SearchSession) -> Result<Vec<u8>, ExportError> {
        session.keyword_table().to_csv()
    }

    pub fn export_contact_csv(&self, session: &SearchSession) -> Result<Vec<u8>, ExportError> {
        session.contact_table().to_csv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::MockContactLookup;
    use crate::records::{sample_contact_records, ExtractedContact};

    fn presenter() -> ResultPresenter<MockContactLookup> {
        ResultPresenter::new(MockContactLookup::new())
    }

    #[test]
    fn keyword_search_never_changes_listings() {
        let p = presenter();
        let session = SearchSession::new();
        for (keyword, location) in [("", ""), ("Rust", "Berlin"), ("   ", "x")] {
            let notice = p.search_by_keyword(&session, keyword, location);
            assert_eq!(notice, Notice::info(KEYWORD_PENDING_NOTICE));
            assert_eq!(session.keyword_listings, sample_keyword_listings());
        }
    }

    #[test]
    fn empty_url_warns_and_keeps_samples() {
        let p = presenter();
        let mut session = SearchSession::new();
        let notice = p.search_by_url(&mut session, "");
        assert_eq!(notice, Some(Notice::warning(EMPTY_URL_WARNING)));
        assert_eq!(session.contacts, ContactResults::Sample(sample_contact_records()));
    }

    #[test]
    fn non_empty_url_replaces_with_single_record() {
        let expected = ExtractedContact {
            contact: "Extracted Contact Name".into(),
            email: "contact@example.com".into(),
            phone: "+1-123-456-7890".into(),
        };
        for url in ["https://foo.com", "anything", " "] {
            let p = presenter();
            let mut session = SearchSession::new();
            assert_eq!(p.search_by_url(&mut session, url), None);
            assert_eq!(session.contacts, ContactResults::Extracted(vec![expected.clone()]));
        }
    }

    #[test]
    fn repeated_searches_stay_replaced() {
        let p = presenter();
        let mut session = SearchSession::new();
        p.search_by_url(&mut session, "https://a.com");
        p.search_by_url(&mut session, "");
        assert_eq!(session.contacts.len(), 1);
    }

    #[test]
    fn contact_export_changes_only_after_non_empty_search() {
        let p = presenter();
        let mut session = SearchSession::new();
        let before = p.export_contact_csv(&session).unwrap();

        p.search_by_url(&mut session, "");
        assert_eq!(p.export_contact_csv(&session).unwrap(), before);

        p.search_by_url(&mut session, "https://foo.com");
        let after = String::from_utf8(p.export_contact_csv(&session).unwrap()).unwrap();
        assert_ne!(after.as_bytes(), before.as_slice());
        assert_eq!(
            after,
            "Contact,Email,Phone Number\nExtracted Contact Name,contact@example.com,+1-123-456-7890\n"
        );
    }
}
