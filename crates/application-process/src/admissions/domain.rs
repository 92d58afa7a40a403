use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Locations where mentors work and schools operate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Miskolc,
    Budapest,
    Krakow,
    Warsaw,
    Bucharest,
}

impl City {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Miskolc,
            Self::Budapest,
            Self::Krakow,
            Self::Warsaw,
            Self::Bucharest,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Miskolc => "Miskolc",
            Self::Budapest => "Budapest",
            Self::Krakow => "Krakow",
            Self::Warsaw => "Warsaw",
            Self::Bucharest => "Bucharest",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown city '{0}'")]
pub struct UnknownCity(pub String);

impl FromStr for City {
    type Err = UnknownCity;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|city| city.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCity(value.to_string()))
    }
}

/// Outcome of an applicant's admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Approved,
    Rejected,
    Cancelled,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Applied, Self::Approved, Self::Rejected, Self::Cancelled]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown application status '{0}'")]
pub struct UnknownApplicationStatus(pub String);

impl FromStr for ApplicationStatus {
    type Err = UnknownApplicationStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownApplicationStatus(value.to_string()))
    }
}

/// Staff member supervising applicants at one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mentor {
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub city: City,
    pub phone_number: String,
    /// Free text, compared verbatim by language queries.
    pub favorite_language: String,
}

impl Mentor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Mentor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Prospective student and the state of their admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applicant {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub status: ApplicationStatus,
    start_date: Option<NaiveDate>,
}

impl Applicant {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        status: ApplicationStatus,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
            status,
            start_date: None,
        }
    }

    pub fn approved(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            start_date: Some(start_date),
            ..Self::new(
                first_name,
                last_name,
                phone_number,
                email,
                ApplicationStatus::Approved,
            )
        }
    }

    /// Program start date; only present while the applicant is approved.
    pub fn start_date(&self) -> Option<NaiveDate> {
        match self.status {
            ApplicationStatus::Approved => self.start_date,
            _ => None,
        }
    }
}

impl fmt::Display for Applicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Physical program location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct School {
    pub name: String,
    pub city: City,
    pub country: String,
}

impl fmt::Display for School {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.city, self.country)
    }
}

/// Handle to a mentor inside the dataset that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MentorId(pub(crate) usize);

/// Handle to an applicant inside the dataset that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApplicantId(pub(crate) usize);

/// One applicant applying under one mentor on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Application {
    pub mentor: MentorId,
    pub applicant: ApplicantId,
    pub applied_on: NaiveDate,
}
