//! Create and edit forms
//!
//! Field names match the keys the form parsers in `models` read.

use super::{attr, layout, text};
use crate::db::repos::{Artist, Venue};
use crate::http::flash::Flash;

/// Choices offered by the genres multi-select
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

fn input(name: &str, label: &str, value: Option<&str>, required: bool) -> String {
    format!(
        "<label>{label} <input type=\"text\" name=\"{name}\" value=\"{value}\"{required}></label>\n",
        label = text(label),
        name = name,
        value = attr(value.unwrap_or("")),
        required = if required { " required" } else { "" },
    )
}

fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        "<label><input type=\"checkbox\" name=\"{}\" value=\"y\"{}> {}</label>\n",
        name,
        if checked { " checked" } else { "" },
        text(label)
    )
}

fn genre_option(genre: &str, selected: bool) -> String {
    format!(
        "<option value=\"{}\"{}>{}</option>\n",
        attr(genre),
        if selected { " selected" } else { "" },
        text(genre)
    )
}

/// Stored genres outside `GENRE_CHOICES` are offered too, already selected,
/// so re-submitting an edit form keeps them.
fn genres_select(selected: &[String]) -> String {
    let mut html = String::from("<label>Genres <select name=\"genres\" multiple>\n");
    for choice in GENRE_CHOICES {
        html.push_str(&genre_option(choice, selected.iter().any(|g| g == choice)));
    }
    for extra in selected.iter().filter(|g| !GENRE_CHOICES.contains(&g.as_str())) {
        html.push_str(&genre_option(extra, true));
    }
    html.push_str("</select></label>\n");
    html
}

/// `action` is an internal path and is not escaped.
fn form_page(title: &str, action: &str, fields: &str, flashes: &[Flash]) -> String {
    let body = format!(
        "<h1>{}</h1>\n<form action=\"{}\" method=\"post\">\n{}<button type=\"submit\">Submit</button>\n</form>\n",
        text(title),
        action,
        fields
    );
    layout(title, flashes, &body)
}

/// New venue form, or the edit form pre-filled from `venue`.
pub fn venue_form(venue: Option<&Venue>, flashes: &[Flash]) -> String {
    let (title, action) = match venue {
        Some(v) => (format!("Edit venue {}", v.name), format!("/venues/{}/edit", v.id)),
        None => ("List a new venue".to_string(), "/venues/create".to_string()),
    };

    let mut fields = String::new();
    fields.push_str(&input("name", "Name", venue.map(|v| v.name.as_str()), true));
    fields.push_str(&input("city", "City", venue.map(|v| v.city.as_str()), true));
    fields.push_str(&input("state", "State", venue.map(|v| v.state.as_str()), true));
    fields.push_str(&input("address", "Address", venue.map(|v| v.address.as_str()), true));
    fields.push_str(&input("phone", "Phone", venue.and_then(|v| v.phone.as_deref()), false));
    fields.push_str(&input(
        "image_link",
        "Image Link",
        venue.and_then(|v| v.image_link.as_deref()),
        false,
    ));
    fields.push_str(&genres_select(venue.map(|v| v.genres.as_slice()).unwrap_or_default()));
    fields.push_str(&input(
        "facebook_link",
        "Facebook Link",
        venue.and_then(|v| v.facebook_link.as_deref()),
        false,
    ));
    fields.push_str(&input(
        "website_link",
        "Website Link",
        venue.and_then(|v| v.website_link.as_deref()),
        false,
    ));
    fields.push_str(&checkbox(
        "seeking_talent",
        "Looking for Talent",
        venue.is_some_and(|v| v.seeking_talent),
    ));
    fields.push_str(&input(
        "seeking_description",
        "Seeking Description",
        venue.and_then(|v| v.seeking_description.as_deref()),
        false,
    ));

    form_page(&title, &action, &fields, flashes)
}

/// New artist form, or the edit form pre-filled from `artist`.
pub fn artist_form(artist: Option<&Artist>, flashes: &[Flash]) -> String {
    let (title, action) = match artist {
        Some(a) => (format!("Edit artist {}", a.name), format!("/artists/{}/edit", a.id)),
        None => ("List a new artist".to_string(), "/artists/create".to_string()),
    };

    let mut fields = String::new();
    fields.push_str(&input("name", "Name", artist.map(|a| a.name.as_str()), true));
    fields.push_str(&input("city", "City", artist.map(|a| a.city.as_str()), true));
    fields.push_str(&input("state", "State", artist.map(|a| a.state.as_str()), true));
    fields.push_str(&input("phone", "Phone", artist.and_then(|a| a.phone.as_deref()), false));
    fields.push_str(&input(
        "image_link",
        "Image Link",
        artist.and_then(|a| a.image_link.as_deref()),
        false,
    ));
    fields.push_str(&genres_select(artist.map(|a| a.genres.as_slice()).unwrap_or_default()));
    fields.push_str(&input(
        "facebook_link",
        "Facebook Link",
        artist.and_then(|a| a.facebook_link.as_deref()),
        false,
    ));
    fields.push_str(&input(
        "website_link",
        "Website Link",
        artist.and_then(|a| a.website_link.as_deref()),
        false,
    ));
    fields.push_str(&checkbox(
        "seeking_venue",
        "Looking for Venues",
        artist.is_some_and(|a| a.seeking_venue),
    ));
    fields.push_str(&input(
        "seeking_description",
        "Seeking Description",
        artist.and_then(|a| a.seeking_description.as_deref()),
        false,
    ));

    form_page(&title, &action, &fields, flashes)
}

/// New show form.
pub fn show_form(flashes: &[Flash]) -> String {
    let mut fields = String::new();
    fields.push_str(&input("artist_id", "Artist ID", None, true));
    fields.push_str(&input("venue_id", "Venue ID", None, true));
    fields.push_str(
        "<label>Start Time <input type=\"datetime-local\" name=\"start_time\" required></label>\n",
    );
    form_page("List a new show", "/shows/create", &fields, flashes)
}
