//! Venue form submission

use super::{FormFields, Genres, ValidationError};

/// A validated venue create/edit submission.
///
/// Edits replace every field with these values; nothing is patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub genres: Genres,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Parse a submitted venue form.
    ///
    /// # Rules
    /// - `name`, `city`, `state`, `address` are required
    /// - `genres` may be submitted zero, one or many times
    /// - `seeking_talent` is a checkbox
    pub fn parse(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            name: fields.required_text("name")?,
            city: fields.required_text("city")?,
            state: fields.required_text("state")?,
            address: fields.required_text("address")?,
            phone: fields.optional_text("phone"),
            image_link: fields.optional_text("image_link"),
            genres: Genres::from_values(fields.all("genres")),
            facebook_link: fields.optional_text("facebook_link"),
            website_link: fields.optional_text("website_link"),
            seeking_talent: fields.flag("seeking_talent"),
            seeking_description: fields.optional_text("seeking_description"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::fields;

    #[test]
    fn parses_full_submission() {
        let form = VenueForm::parse(&fields(&[
            ("name", "The Musical Hop"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("seeking_talent", "y"),
            ("seeking_description", "Local artists wanted"),
        ]))
        .unwrap();

        assert_eq!(form.name, "The Musical Hop");
        assert_eq!(form.genres.as_slice(), ["Jazz", "Reggae"]);
        assert!(form.seeking_talent);
        assert_eq!(form.website_link, None);
    }

    #[test]
    fn scalar_genre_is_wrapped() {
        let form = VenueForm::parse(&fields(&[
            ("name", "Park Square Live Music & Coffee"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "34 Whiskey Moore Ave"),
            ("genres", "Folk"),
        ]))
        .unwrap();

        assert_eq!(form.genres, Genres::single("Folk"));
        assert!(!form.seeking_talent);
    }

    #[test]
    fn missing_address_is_rejected() {
        let err = VenueForm::parse(&fields(&[
            ("name", "The Dueling Pianos Bar"),
            ("city", "New York"),
            ("state", "NY"),
        ]))
        .unwrap_err();

        assert_eq!(err, ValidationError::Missing { field: "address" });
    }
}
