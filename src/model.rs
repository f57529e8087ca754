use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Per-activity body of `GET /activities`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    /// Capacity minus enrollment. Negative when the server over-subscribed.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.details.max_participants) - self.details.participants.len() as i64
    }
}

/// Activities from one fetch, in the order the server listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog(Vec<Activity>);

impl Catalog {
    pub fn activities(&self) -> &[Activity] {
        &self.0
    }
}

impl FromIterator<Activity> for Catalog {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object keyed by activity name")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Catalog, A::Error> {
        let mut activities: Vec<Activity> = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
            // A repeated key keeps its first position and takes the last value.
            match activities.iter_mut().find(|a| a.name == name) {
                Some(existing) => existing.details = details,
                None => activities.push(Activity { name, details }),
            }
        }
        Ok(Catalog(activities))
    }
}

// Walk the object entry by entry so key order survives decoding.
impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// 2xx body of signup/removal.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

/// Error body. FastAPI validation errors put an array in `detail`; those
/// fail to decode here and the caller falls back to generic text.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
