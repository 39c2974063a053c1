use log::info;

use crate::records::ExtractedContact;

/// Resolves contact details for a URL.
///
/// The presenter only talks to this trait, so a real scraper can replace
/// [`MockContactLookup`] without touching the page logic.
pub trait ContactLookup {
    fn lookup(&self, url: &str) -> ExtractedContact;
}

/// Returns the same fixed contact for every URL. Nothing is fetched or parsed.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockContactLookup;

impl MockContactLookup {
    pub fn new() -> Self {
        MockContactLookup
    }
}

impl ContactLookup for MockContactLookup {
    fn lookup(&self, url: &str) -> ExtractedContact {
        info!("Mock lookup for: {}", url);
        ExtractedContact {
            contact: "Extracted Contact Name".to_string(),
            email: "contact@example.com".to_string(),
            phone: "+1-123-456-7890".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ignores_the_url() {
        let lookup = MockContactLookup::new();
        let a = lookup.lookup("https://foo.com");
        let b = lookup.lookup("not even a url");
        assert_eq!(a, b);
        assert_eq!(a.contact, "Extracted Contact Name");
        assert_eq!(a.email, "contact@example.com");
        assert_eq!(a.phone, "+1-123-456-7890");
    }
}
