//! Show listing page

use super::{attr, format_datetime, layout, text, DateFormat};
use crate::db::repos::ShowListing;
use crate::http::flash::Flash;

/// `/shows`: rows arrive already sorted by start time.
pub fn list(shows: &[ShowListing], flashes: &[Flash]) -> String {
    let mut body = String::from("<h1>Shows</h1>\n<div class=\"shows\">\n");
    for show in shows {
        body.push_str("<div class=\"show\">\n");
        if let Some(image) = &show.artist_image_link {
            body.push_str(&format!(
                "<img src=\"{}\" alt=\"Artist Image\">\n",
                attr(image)
            ));
        }
        body.push_str(&format!(
            "<h4><time>{}</time></h4>\n\
             <h5><a href=\"/artists/{}\">{}</a></h5>\n\
             <p>playing at</p>\n\
             <h5><a href=\"/venues/{}\">{}</a></h5>\n",
            format_datetime(show.start_time, DateFormat::Medium),
            show.artist_id,
            text(&show.artist_name),
            show.venue_id,
            text(&show.venue_name)
        ));
        body.push_str("</div>\n");
    }
    body.push_str("</div>\n");
    layout("Shows", flashes, &body)
}
