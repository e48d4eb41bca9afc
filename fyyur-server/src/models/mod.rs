//! Domain models with validation at construction
//!
//! Form submissions are parsed into these types at the HTTP boundary.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod form;
pub mod genres;
pub mod venue;
pub mod artist;
pub mod show;

pub use validation::ValidationError;
pub use form::FormFields;
pub use genres::Genres;
pub use venue::VenueForm;
pub use artist::ArtistForm;
pub use show::ShowForm;
