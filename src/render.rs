//! Server-side HTML for the two-tab search page.

use crate::presenter::{Notice, NoticeLevel, SearchSession};
use crate::table::{Table, CSV_FILE_NAME};

const STYLE: &str = include_str!("assets/style.css");

pub const PAGE_TITLE: &str = "📱 Application for searching";
const KEYWORD_BANNER: &str = "⚡ Give keyword and location to get list of urls!";
const URL_BANNER: &str = "⚡ Enter url get information like category, email, contact and phone number!";
const SEARCH_HELP: &str =
    "Click to search to display 100 results from google, you can extract them in a csv file.";

const IMPROVEMENTS: &str = "- Ensure the contact information is up-to-date and correctly formatted.
- Add more contact channels (LinkedIn, Twitter, WhatsApp).
- Improve the website’s \"Contact Us\" page for better accessibility.
- Verify email deliverability to avoid bounced emails.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Keyword,
    Url,
}

impl Tab {
    /// Tab named by the `tab` query value; anything unrecognised shows the keyword tab.
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "url" => Tab::Url,
            _ => Tab::Keyword,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Tab::Keyword => "Search By Keyword",
            Tab::Url => "Search By URL",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Tab::Keyword => "keyword",
            Tab::Url => "url",
        }
    }
}

/// Values typed into the input fields, echoed back after a submit.
#[derive(Debug, Clone, Default)]
pub struct FormInputs {
    pub keyword: String,
    pub location: String,
    pub url: String,
}

pub struct PageView<'a> {
    pub session: &'a SearchSession,
    pub active: Tab,
    pub notice: Option<Notice>,
    pub inputs: FormInputs,
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(view: &PageView) -> String {
    let title = escape(PAGE_TITLE);
    let mut html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n"
    );

    html.push_str("<nav class=\"tabs\">\n");
    for tab in [Tab::Keyword, Tab::Url] {
        let class = if tab == view.active { " class=\"active\"" } else { "" };
        html.push_str(&format!("<a href=\"/?tab={}\"{}>{}</a>\n", tab.slug(), class, tab.label()));
    }
    html.push_str("</nav>\n<section>\n");

    match view.active {
        Tab::Keyword => render_keyword_tab(&mut html, view),
        Tab::Url => render_url_tab(&mut html, view),
    }

    html.push_str("</section>\n</body>\n</html>\n");
    html
}

fn render_keyword_tab(html: &mut String, view: &PageView) {
    render_notice(html, &Notice::warning(KEYWORD_BANNER));
    html.push_str(&format!(
        "<form method=\"post\" action=\"/search/keyword\">\n\
         <label for=\"keyword\">Enter keyword:</label>\n\
         <input type=\"text\" id=\"keyword\" name=\"keyword\" value=\"{}\">\n\
         <label for=\"location\">Enter location:</label>\n\
         <input type=\"text\" id=\"location\" name=\"location\" value=\"{}\">\n\
         <button type=\"submit\" title=\"{}\">Search</button>\n</form>\n",
        escape(&view.inputs.keyword),
        escape(&view.inputs.location),
        escape(SEARCH_HELP),
    ));
    if let Some(notice) = &view.notice {
        render_notice(html, notice);
    }
    render_results(html, &view.session.keyword_table());
    render_download(html, Tab::Keyword);
}

fn render_url_tab(html: &mut String, view: &PageView) {
    render_notice(html, &Notice::warning(URL_BANNER));
    html.push_str(&format!(
        "<form method=\"post\" action=\"/search/url\">\n\
         <label for=\"url\">Enter URL:</label>\n\
         <input type=\"text\" id=\"url\" name=\"url\" value=\"{}\">\n\
         <button type=\"submit\" title=\"{}\">Search</button>\n</form>\n",
        escape(&view.inputs.url),
        escape(SEARCH_HELP),
    ));
    if let Some(notice) = &view.notice {
        render_notice(html, notice);
    }
    render_results(html, &view.session.contact_table());

    html.push_str(&format!(
        "<label for=\"improvements\">Improvements</label>\n\
         <textarea id=\"improvements\" disabled>{}</textarea>\n",
        escape(IMPROVEMENTS),
    ));
    render_download(html, Tab::Url);
}

fn render_notice(html: &mut String, notice: &Notice) {
    let class = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
    };
    html.push_str(&format!("<div class=\"notice {}\">{}</div>\n", class, escape(&notice.message)));
}

fn render_download(html: &mut String, tab: Tab) {
    html.push_str(&format!(
        "<a class=\"download\" href=\"/export/{}\" download=\"{}\">Extract to CSV</a>\n",
        tab.slug(),
        CSV_FILE_NAME,
    ));
}

/// Results block: divider, heading, then the table with 1-based row numbers.
pub fn render_results(html: &mut String, table: &Table) {
    html.push_str("<hr>\n<h3>Results</h3>\n<table>\n<thead>\n<tr><th></th>");
    for header in &table.headers {
        html.push_str(&format!("<th>{}</th>", escape(header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for (number, row) in table.numbered_rows() {
        html.push_str(&format!("<tr><th>{}</th>", number));
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{EMPTY_URL_WARNING, KEYWORD_PENDING_NOTICE};

    fn view(session: &SearchSession, active: Tab, notice: Option<Notice>) -> PageView<'_> {
        PageView { session, active, notice, inputs: FormInputs::default() }
    }

    #[test]
    fn unknown_slug_selects_keyword_tab() {
        assert_eq!(Tab::from_slug("url"), Tab::Url);
        assert_eq!(Tab::from_slug("keyword"), Tab::Keyword);
        assert_eq!(Tab::from_slug("bogus"), Tab::Keyword);
        assert_eq!(Tab::from_slug(""), Tab::Keyword);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn results_number_rows_from_one() {
        let session = SearchSession::new();
        let mut html = String::new();
        render_results(&mut html, &session.keyword_table());
        assert!(html.contains("<tr><th>1</th><td>Python Developer</td>"));
        assert!(html.contains("<tr><th>4</th><td>Web Developer</td>"));
        assert!(!html.contains("<th>0</th>"));
    }

    #[test]
    fn keyword_tab_shows_listings_and_notice() {
        let session = SearchSession::new();
        let html = render_page(&view(&session, Tab::Keyword, Some(Notice::info(KEYWORD_PENDING_NOTICE))));
        assert!(html.contains("Search By Keyword"));
        assert!(html.contains("Enter keyword:"));
        assert!(html.contains(KEYWORD_PENDING_NOTICE));
        assert!(html.contains("href=\"/export/keyword\""));
        assert!(!html.contains("Improvements"));
    }

    #[test]
    fn url_tab_shows_contacts_suggestions_and_echoed_input() {
        let session = SearchSession::new();
        let page = PageView {
            session: &session,
            active: Tab::Url,
            notice: Some(Notice::warning(EMPTY_URL_WARNING)),
            inputs: FormInputs { url: "<script>".into(), ..FormInputs::default() },
        };
        let html = render_page(&page);
        assert!(html.contains("<td>John Doe</td>"));
        assert!(html.contains("<textarea id=\"improvements\" disabled>"));
        assert!(html.contains("class=\"notice warning\">Please enter a valid URL."));
        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(html.contains("href=\"/export/url\""));
    }
}
