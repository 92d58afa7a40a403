use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::admissions::domain::{ApplicationStatus, City};

pub(crate) fn parse_rows<R, T>(reader: R) -> Result<Vec<T>, csv::Error>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<T>().collect()
}

#[derive(Debug, Deserialize)]
pub(crate) struct MentorRow {
    pub(crate) key: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) nickname: Option<String>,
    pub(crate) city: City,
    pub(crate) phone_number: String,
    pub(crate) favorite_language: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplicantRow {
    pub(crate) key: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) phone_number: String,
    pub(crate) email: String,
    pub(crate) status: ApplicationStatus,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) start_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SchoolRow {
    pub(crate) name: String,
    pub(crate) city: City,
    pub(crate) country: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplicationRow {
    pub(crate) mentor: String,
    pub(crate) applicant: String,
    pub(crate) applied_on: NaiveDate,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
