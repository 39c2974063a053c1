use serde::{Deserialize, Serialize};

use crate::table::{Table, TableRow};

/// Sample job search result keyed by keyword and location.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct KeywordListing {
    #[serde(rename = "Keyword")]
    pub keyword: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Contact metadata associated with a job posting URL.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Contact")]
    pub contact: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone Number")]
    pub phone: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// What a contact lookup yields for a single URL. Carries no category or URL.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExtractedContact {
    #[serde(rename = "Contact")]
    pub contact: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone Number")]
    pub phone: String,
}

impl TableRow for KeywordListing {
    const HEADERS: &'static [&'static str] = &["Keyword", "Location", "URL"];

    fn cells(&self) -> Vec<String> {
        vec![self.keyword.clone(), self.location.clone(), self.url.clone()]
    }
}

impl TableRow for ContactRecord {
    const HEADERS: &'static [&'static str] = &["Category", "Contact", "Email", "Phone Number", "URL"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.contact.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.url.clone(),
        ]
    }
}

impl TableRow for ExtractedContact {
    const HEADERS: &'static [&'static str] = &["Contact", "Email", "Phone Number"];

    fn cells(&self) -> Vec<String> {
        vec![self.contact.clone(), self.email.clone(), self.phone.clone()]
    }
}

fn listing(keyword: &str, location: &str, url: &str) -> KeywordListing {
    KeywordListing {
        keyword: keyword.to_string(),
        location: location.to_string(),
        url: url.to_string(),
    }
}

fn contact(category: &str, name: &str, email: &str, phone: &str, url: &str) -> ContactRecord {
    ContactRecord {
        category: category.to_string(),
        contact: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        url: url.to_string(),
    }
}

/// The four listings every session starts with.
pub fn sample_keyword_listings() -> Vec<KeywordListing> {
    vec![
        listing("Python Developer", "New York", "https://example.com/job1"),
        listing("Data Analyst", "San Francisco", "https://example.com/job2"),
        listing("Machine Learning Engineer", "Austin", "https://example.com/job3"),
        listing("Web Developer", "Los Angeles", "https://example.com/job4"),
    ]
}

/// The four contact records every session starts with.
pub fn sample_contact_records() -> Vec<ContactRecord> {
    vec![
        contact("IT", "John Doe", "john@example.com", "+1-555-1234", "https://example.com/it-job1"),
        contact("Finance", "Jane Smith", "jane@example.com", "+1-555-5678", "https://example.com/finance-job2"),
        contact("Marketing", "Alice Brown", "alice@example.com", "+1-555-8765", "https://example.com/marketing-job3"),
        contact("Engineering", "Bob Johnson", "bob@example.com", "+1-555-4321", "https://example.com/engineering-job4"),
    ]
}

/// Contents of the URL tab. Starts as the sample records and is replaced
/// wholesale, never merged, once a lookup succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactResults {
    Sample(Vec<ContactRecord>),
    Extracted(Vec<ExtractedContact>),
}

impl Default for ContactResults {
    fn default() -> Self {
        ContactResults::Sample(sample_contact_records())
    }
}

impl ContactResults {
    pub fn to_table(&self) -> Table {
        match self {
            ContactResults::Sample(records) => Table::from_rows(records),
            ContactResults::Extracted(records) => Table::from_rows(records),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ContactResults::Sample(records) => records.len(),
            ContactResults::Extracted(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
