use serde::{Deserialize, Serialize};

/// Typed projection of an accepted source row.
///
/// Field names serialize as the destination table columns (`rank_num`,
/// `runtime_minutes`, ...), so writing a batch of these produces the clean
/// store schema directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    #[serde(rename = "rank_num")]
    pub rank: i64,
    pub title: String,
    pub genre: String,
    pub description: String,
    pub director: String,
    pub actors: String,
    pub year: i64,
    pub runtime_minutes: i64,
    pub rating: f64,
    pub votes: i64,
    pub revenue_millions: f64,
    pub metascore: f64,
}
