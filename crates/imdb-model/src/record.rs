use serde::ser::{Serialize, SerializeMap, Serializer};

/// Column names of the source CSV.
pub mod fields {
    pub const RANK: &str = "Rank";
    pub const TITLE: &str = "Title";
    pub const GENRE: &str = "Genre";
    pub const DESCRIPTION: &str = "Description";
    pub const DIRECTOR: &str = "Director";
    pub const ACTORS: &str = "Actors";
    pub const YEAR: &str = "Year";
    pub const RUNTIME_MINUTES: &str = "Runtime (Minutes)";
    pub const RATING: &str = "Rating";
    pub const VOTES: &str = "Votes";
    pub const REVENUE_MILLIONS: &str = "Revenue (Millions)";
    pub const METASCORE: &str = "Metascore";
}

/// All source columns in file order.
pub const SOURCE_FIELDS: [&str; 12] = [
    fields::RANK,
    fields::TITLE,
    fields::GENRE,
    fields::DESCRIPTION,
    fields::DIRECTOR,
    fields::ACTORS,
    fields::YEAR,
    fields::RUNTIME_MINUTES,
    fields::RATING,
    fields::VOTES,
    fields::REVENUE_MILLIONS,
    fields::METASCORE,
];

/// One source CSV row as an order-preserving field-name to value mapping.
///
/// Values are kept exactly as read; a column that was not present in the
/// source is distinct from a column holding an empty string. Serializes to a
/// JSON object with keys in input order, so an audit entry reproduces the
/// row as it appeared in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    entries: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self { entries }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Look up a field by exact column name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl Serialize for RawRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
