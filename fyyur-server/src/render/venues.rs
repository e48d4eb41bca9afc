//! Venue pages

use super::{
    attr, format_datetime, genre_list, layout, listing_item, optional_link, text, DateFormat,
};
use crate::db::repos::{Area, VenueDetail, VenueShow};
use crate::http::flash::Flash;

/// `/venues`: one section per (city, state).
pub fn areas(areas: &[Area], flashes: &[Flash]) -> String {
    let mut body = String::from("<h1>Venues</h1>\n");
    for area in areas {
        body.push_str(&format!(
            "<section class=\"area\">\n<h3>{}, {}</h3>\n<ul class=\"items\">\n",
            text(&area.city),
            text(&area.state)
        ));
        for venue in &area.venues {
            body.push_str(&listing_item("venues", venue));
        }
        body.push_str("</ul>\n</section>\n");
    }
    layout("Venues", flashes, &body)
}

/// `/venues/{id}`
pub fn detail(detail: &VenueDetail, flashes: &[Flash]) -> String {
    let venue = &detail.venue;
    let mut body = format!(
        "<h1>{}</h1>\n<p class=\"subtitle\">ID: {}</p>\n",
        text(&venue.name),
        venue.id
    );
    body.push_str(&genre_list(&venue.genres));
    body.push_str(&format!(
        "<p>{}</p>\n<p>{}, {}</p>\n",
        text(&venue.address),
        text(&venue.city),
        text(&venue.state)
    ));
    if let Some(phone) = &venue.phone {
        body.push_str(&format!("<p>{}</p>\n", text(phone)));
    }
    body.push_str(&optional_link("Website", venue.website_link.as_deref()));
    body.push_str(&optional_link("Facebook", venue.facebook_link.as_deref()));

    if venue.seeking_talent {
        body.push_str("<div class=\"seeking\"><p>Currently seeking talent</p>");
        if let Some(description) = &venue.seeking_description {
            body.push_str(&format!("<p>{}</p>", text(description)));
        }
        body.push_str("</div>\n");
    } else {
        body.push_str("<p class=\"not-seeking\">Not currently seeking talent</p>\n");
    }

    if let Some(image) = &venue.image_link {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"Venue Image\">\n",
            attr(image)
        ));
    }

    body.push_str(&shows_section("Upcoming", &detail.upcoming_shows));
    body.push_str(&shows_section("Past", &detail.past_shows));

    body.push_str(&format!(
        "<p><a href=\"/venues/{id}/edit\">Edit venue</a></p>\n\
         <form action=\"/venues/{id}\" method=\"post\"><button type=\"submit\">Delete venue</button></form>\n",
        id = venue.id
    ));

    layout(&venue.name, flashes, &body)
}

fn shows_section(label: &str, shows: &[VenueShow]) -> String {
    let noun = if shows.len() == 1 { "Show" } else { "Shows" };
    let mut html = format!(
        "<section class=\"shows\">\n<h2>{} {} {}</h2>\n",
        shows.len(),
        label,
        noun
    );
    for show in shows {
        html.push_str(&format!(
            "<div class=\"show\"><a href=\"/artists/{}\">{}</a> <time>{}</time></div>\n",
            show.artist_id,
            text(&show.artist_name),
            format_datetime(show.start_time, DateFormat::Full)
        ));
    }
    html.push_str("</section>\n");
    html
}
