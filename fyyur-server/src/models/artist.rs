//! Artist form submission

use super::{FormFields, Genres, ValidationError};

/// A validated artist create/edit submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub genres: Genres,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn parse(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            name: fields.required_text("name")?,
            city: fields.required_text("city")?,
            state: fields.required_text("state")?,
            phone: fields.optional_text("phone"),
            image_link: fields.optional_text("image_link"),
            genres: Genres::from_values(fields.all("genres")),
            facebook_link: fields.optional_text("facebook_link"),
            website_link: fields.optional_text("website_link"),
            seeking_venue: fields.flag("seeking_venue"),
            seeking_description: fields.optional_text("seeking_description"),
        })
    }
}
