use std::collections::BTreeSet;

pub const HELSINKI: &str = "home-assignment-venue-helsinki";
pub const STOCKHOLM: &str = "home-assignment-venue-stockholm";
pub const BERLIN: &str = "home-assignment-venue-berlin";

pub const DEFAULT_VENUES: [&str; 3] = [HELSINKI, STOCKHOLM, BERLIN];

/// The finite set of venue slugs a request may name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueRegistry {
    slugs: BTreeSet<String>,
}

impl VenueRegistry {
    pub fn new<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slugs: slugs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.contains(slug)
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(String::as_str)
    }
}

impl Default for VenueRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_VENUES)
    }
}
