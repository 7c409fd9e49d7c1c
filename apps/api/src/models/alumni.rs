use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One alumni directory entry. Read-only surface; rows are seeded from an
/// external import, which is why `company` can hold junk like "nan".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AlumnusRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub year_of_passing: Option<i32>,
    pub company: Option<String>,
    pub linkedin: Option<String>,
}

/// Query parameters of the directory search. `q` searches name and email,
/// case-insensitively. See `alumni::query` for the matching rules.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlumniFilter {
    pub year: Option<i32>,
    pub company: Option<String>,
    #[serde(rename = "q")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlumniFilterOptions {
    pub years: Vec<i32>,
    pub companies: Vec<String>,
}
