//! HTML rendering
//!
//! Pure functions from view data to complete HTML documents. Every
//! interpolated value goes through [`text`] or [`attr`].

pub mod artists;
pub mod forms;
pub mod shows;
pub mod venues;

use chrono::{DateTime, Utc};
use htmlescape::{encode_attribute, encode_minimal};

use crate::db::repos::{Listing, SearchResults};
use crate::http::flash::Flash;

/// Date display styles used by the listing pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `Tue 05, 21, 2019 9:30PM`
    Medium,
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
}

pub fn format_datetime(value: DateTime<Utc>, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
    };
    value.format(pattern).to_string()
}

/// Escape text content.
pub fn text(value: &str) -> String {
    encode_minimal(value)
}

/// Escape an attribute value.
pub fn attr(value: &str) -> String {
    encode_attribute(value)
}

/// Wrap a page body in the shared layout: navigation, flashes, footer.
pub fn layout(title: &str, flashes: &[Flash], body: &str) -> String {
    let mut flash_html = String::new();
    for flash in flashes {
        flash_html.push_str(&format!(
            "<div class=\"alert alert-{}\" role=\"alert\">{}</div>\n",
            flash.level.as_str(),
            text(&flash.message)
        ));
    }

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Fyyur</title>
</head>
<body>
<nav>
<a href="/">Fyyur</a>
<a href="/venues">Venues</a>
<a href="/artists">Artists</a>
<a href="/shows">Shows</a>
<form action="/venues/search" method="post"><input name="search_term" placeholder="Find a venue"></form>
<form action="/artists/search" method="post"><input name="search_term" placeholder="Find an artist"></form>
</nav>
<main>
{flash_html}{body}
</main>
<footer>Fyyur</footer>
</body>
</html>
"#,
        title = text(title),
    )
}

pub fn home(flashes: &[Flash]) -> String {
    let body = r#"<h1>Fyyur</h1>
<p>Find venues, book artists, and list upcoming shows.</p>
<ul>
<li><a href="/venues/create">Post a venue</a></li>
<li><a href="/artists/create">Post an artist</a></li>
<li><a href="/shows/create">Post a show</a></li>
</ul>
"#;
    layout("Home", flashes, body)
}

pub fn not_found() -> String {
    layout(
        "Not Found",
        &[],
        "<h1>404</h1>\n<p>Sorry, the page you were looking for could not be found.</p>\n",
    )
}

pub fn server_error() -> String {
    layout(
        "Server Error",
        &[],
        "<h1>500</h1>\n<p>Something went wrong. Please try again later.</p>\n",
    )
}

/// Search results page shared by venues and artists.
///
/// `kind` is the URL segment, `venues` or `artists`.
pub fn search_results(
    kind: &str,
    search_term: &str,
    results: &SearchResults,
    flashes: &[Flash],
) -> String {
    let mut body = format!(
        "<h3>Number of search results for \"{}\": {}</h3>\n<ul class=\"items\">\n",
        text(search_term),
        results.count
    );
    for item in &results.data {
        body.push_str(&listing_item(kind, item));
    }
    body.push_str("</ul>\n");
    layout("Search", flashes, &body)
}

/// One `<li>` linking a venue or artist with its upcoming show count.
pub(crate) fn listing_item(kind: &str, item: &Listing) -> String {
    format!(
        "<li><a href=\"/{}/{}\">{}</a> <span class=\"upcoming\">{} upcoming shows</span></li>\n",
        kind,
        item.id,
        text(&item.name),
        item.num_upcoming_shows
    )
}

/// Comma separated genre list, or nothing.
pub(crate) fn genre_list(genres: &[String]) -> String {
    if genres.is_empty() {
        return String::new();
    }
    let items: Vec<String> = genres
        .iter()
        .map(|g| format!("<span class=\"genre\">{}</span>", text(g)))
        .collect();
    format!("<div class=\"genres\">{}</div>\n", items.join(", "))
}

/// Render an optional link field, skipping blanks.
pub(crate) fn optional_link(label: &str, href: Option<&str>) -> String {
    match href {
        Some(href) => format!(
            "<p><a href=\"{}\">{}</a></p>\n",
            attr(href),
            text(label)
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_dates() {
        let dt = Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap();
        assert_eq!(format_datetime(dt, DateFormat::Medium), "Tue 05, 21, 2019 9:30PM");
        assert_eq!(
            format_datetime(dt, DateFormat::Full),
            "Tuesday May, 21, 2019 at 9:30PM"
        );
    }

    #[test]
    fn layout_escapes_flash_messages() {
        let html = layout("Home", &[Flash::error("<script>alert(1)</script>")], "");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("alert-error"));
    }

    #[test]
    fn genre_list_escapes() {
        let html = genre_list(&["R&B".to_string()]);
        assert!(html.contains("R&amp;B"));
        assert_eq!(genre_list(&[]), "");
    }

    #[test]
    fn search_results_link_each_match() {
        let results = SearchResults::new(vec![Listing {
            id: 1,
            name: "The Musical Hop".into(),
            num_upcoming_shows: 2,
        }]);
        let html = search_results("venues", "hop", &results, &[]);
        assert!(html.contains("Number of search results for \"hop\": 1"));
        assert!(html.contains("href=\"/venues/1\""));
        assert!(html.contains("2 upcoming shows"));
    }

    #[test]
    fn error_pages_have_codes() {
        assert!(not_found().contains("404"));
        assert!(server_error().contains("500"));
    }
}
