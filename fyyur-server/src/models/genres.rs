//! Normalized genre list
//!
//! Forms may submit `genres` once (a scalar) or many times (a multi-select).
//! Both shapes become the same ordered list here, so nothing past the
//! boundary ever sees a bare string.

/// Ordered list of genre names, trimmed, without blanks or repeats
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Genres(Vec<String>);

impl Genres {
    /// Build from every submitted value, keeping submission order.
    ///
    /// Duplicates are dropped after their first occurrence.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut genres: Vec<String> = Vec::new();
        for value in values {
            let value = value.as_ref().trim();
            if value.is_empty() || genres.iter().any(|g| g == value) {
                continue;
            }
            genres.push(value.to_owned());
        }
        Self(genres)
    }

    /// A single scalar value, wrapped as a one-element list.
    pub fn single(value: &str) -> Self {
        Self::from_values([value])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
