pub mod config;
pub mod error;
pub mod logger;
pub mod lookup;
pub mod presenter;
pub mod records;
pub mod render;
pub mod server;
pub mod session;
pub mod table;

// Exporting types for convenience
pub use config::ServerConfig;
pub use lookup::{ContactLookup, MockContactLookup};
pub use presenter::{Notice, NoticeLevel, ResultPresenter, SearchSession};
pub use records::{ContactRecord, ContactResults, ExtractedContact, KeywordListing};
pub use table::Table;
