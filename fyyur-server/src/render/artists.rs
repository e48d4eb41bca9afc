//! Artist pages

use super::{
    attr, format_datetime, genre_list, layout, listing_item, optional_link, text, DateFormat,
};
use crate::db::repos::{ArtistDetail, ArtistShow, Listing};
use crate::http::flash::Flash;

/// `/artists`
pub fn list(artists: &[Listing], flashes: &[Flash]) -> String {
    let mut body = String::from("<h1>Artists</h1>\n<ul class=\"items\">\n");
    for artist in artists {
        body.push_str(&listing_item("artists", artist));
    }
    body.push_str("</ul>\n");
    layout("Artists", flashes, &body)
}

/// `/artists/{id}`
pub fn detail(detail: &ArtistDetail, flashes: &[Flash]) -> String {
    let artist = &detail.artist;
    let mut body = format!(
        "<h1>{}</h1>\n<p class=\"subtitle\">ID: {}</p>\n",
        text(&artist.name),
        artist.id
    );
    body.push_str(&genre_list(&artist.genres));
    body.push_str(&format!(
        "<p>{}, {}</p>\n",
        text(&artist.city),
        text(&artist.state)
    ));
    if let Some(phone) = &artist.phone {
        body.push_str(&format!("<p>{}</p>\n", text(phone)));
    }
    body.push_str(&optional_link("Website", artist.website_link.as_deref()));
    body.push_str(&optional_link("Facebook", artist.facebook_link.as_deref()));

    if artist.seeking_venue {
        body.push_str("<div class=\"seeking\"><p>Currently seeking performance venues</p>");
        if let Some(description) = &artist.seeking_description {
            body.push_str(&format!("<p>{}</p>", text(description)));
        }
        body.push_str("</div>\n");
    } else {
        body.push_str("<p class=\"not-seeking\">Not currently seeking performance venues</p>\n");
    }

    if let Some(image) = &artist.image_link {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"Artist Image\">\n",
            attr(image)
        ));
    }

    body.push_str(&shows_section("Upcoming", &detail.upcoming_shows));
    body.push_str(&shows_section("Past", &detail.past_shows));

    body.push_str(&format!(
        "<p><a href=\"/artists/{id}/edit\">Edit artist</a></p>\n\
         <form action=\"/artists/{id}\" method=\"post\"><button type=\"submit\">Delete artist</button></form>\n",
        id = artist.id
    ));

    layout(&artist.name, flashes, &body)
}

fn shows_section(label: &str, shows: &[ArtistShow]) -> String {
    let noun = if shows.len() == 1 { "Show" } else { "Shows" };
    let mut html = format!(
        "<section class=\"shows\">\n<h2>{} {} {}</h2>\n",
        shows.len(),
        label,
        noun
    );
    for show in shows {
        html.push_str(&format!(
            "<div class=\"show\"><a href=\"/venues/{}\">{}</a> <time>{}</time></div>\n",
            show.venue_id,
            text(&show.venue_name),
            format_datetime(show.start_time, DateFormat::Full)
        ));
    }
    html.push_str("</section>\n");
    html
}
