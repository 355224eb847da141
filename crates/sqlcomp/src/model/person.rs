use crate::error::SqlResult;
use crate::row::{FromRow, RowExt};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// A student or staff member of the `people` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub code: String,
    pub gender: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub avatar: String,
    #[serde(rename = "type")]
    pub kind: i32,
    pub home_city: String,
    pub current_city: String,
    pub ethnic: i32,
    pub nationality: String,
    pub birth_date: NaiveDate,
    pub admission_year: i32,
    pub period: i32,
    pub is_verified: bool,
    pub doc_verifier: String,
}

impl Person {
    /// Column names in table order.
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "code",
        "gender",
        "first_name",
        "last_name",
        "phone",
        "avatar",
        "type",
        "home_city",
        "current_city",
        "ethnic",
        "nationality",
        "birth_date",
        "admission_year",
        "period",
        "is_verified",
        "doc_verifier",
    ];

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl FromRow for Person {
    fn from_row(row: &Row) -> SqlResult<Self> {
        Ok(Self {
            id: row.try_get_column("id")?,
            code: row.try_get_column("code")?,
            gender: row.try_get_column("gender")?,
            first_name: row.try_get_column("first_name")?,
            last_name: row.try_get_column("last_name")?,
            phone: row.try_get_column("phone")?,
            avatar: row.try_get_column("avatar")?,
            kind: row.try_get_column("type")?,
            home_city: row.try_get_column("home_city")?,
            current_city: row.try_get_column("current_city")?,
            ethnic: row.try_get_column("ethnic")?,
            nationality: row.try_get_column("nationality")?,
            birth_date: row.try_get_column("birth_date")?,
            admission_year: row.try_get_column("admission_year")?,
            period: row.try_get_column("period")?,
            is_verified: row.try_get_column("is_verified")?,
            doc_verifier: row.try_get_column("doc_verifier")?,
        })
    }
}
