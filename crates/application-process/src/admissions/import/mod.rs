//! Loads a replacement dataset from CSV exports.

mod parser;

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::dataset::{Dataset, DatasetError};
use super::domain::{Applicant, ApplicantId, ApplicationStatus, Mentor, MentorId, School};
use parser::{parse_date, parse_rows, ApplicantRow, ApplicationRow, MentorRow, SchoolRow};

pub const MENTORS_FILE: &str = "mentors.csv";
pub const APPLICANTS_FILE: &str = "applicants.csv";
pub const SCHOOLS_FILE: &str = "schools.csv";
pub const APPLICATIONS_FILE: &str = "applications.csv";

#[derive(Debug, thiserror::Error)]
pub enum DatasetImportError {
    #[error("failed to read {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid CSV data in {file}: {source}")]
    Csv {
        file: &'static str,
        source: csv::Error,
    },
    #[error("mentor key '{0}' appears more than once")]
    DuplicateMentor(String),
    #[error("applicant key '{0}' appears more than once")]
    DuplicateApplicant(String),
    #[error("application references unknown mentor '{0}'")]
    UnknownMentor(String),
    #[error("application references unknown applicant '{0}'")]
    UnknownApplicant(String),
    #[error("applicant '{key}' has unparseable start date '{value}'")]
    InvalidStartDate { key: String, value: String },
    #[error("applicant '{key}' has a start date but status {status}")]
    StartDateWithoutApproval {
        key: String,
        status: ApplicationStatus,
    },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// The four CSV streams making up one dataset.
pub struct DatasetSources<M, A, S, P> {
    pub mentors: M,
    pub applicants: A,
    pub schools: S,
    pub applications: P,
}

pub struct DatasetImporter;

impl DatasetImporter {
    /// Reads `mentors.csv`, `applicants.csv`, `schools.csv` and `applications.csv`
    /// from `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Dataset, DatasetImportError> {
        let dir = dir.as_ref();
        debug!(dir = %dir.display(), "importing dataset");

        Self::from_readers(DatasetSources {
            mentors: open(dir, MENTORS_FILE)?,
            applicants: open(dir, APPLICANTS_FILE)?,
            schools: open(dir, SCHOOLS_FILE)?,
            applications: open(dir, APPLICATIONS_FILE)?,
        })
    }

    pub fn from_readers<M, A, S, P>(
        sources: DatasetSources<M, A, S, P>,
    ) -> Result<Dataset, DatasetImportError>
    where
        M: Read,
        A: Read,
        S: Read,
        P: Read,
    {
        let mentor_rows: Vec<MentorRow> = rows(sources.mentors, MENTORS_FILE)?;
        let applicant_rows: Vec<ApplicantRow> = rows(sources.applicants, APPLICANTS_FILE)?;
        let school_rows: Vec<SchoolRow> = rows(sources.schools, SCHOOLS_FILE)?;
        let application_rows: Vec<ApplicationRow> =
            rows(sources.applications, APPLICATIONS_FILE)?;

        let mut builder = Dataset::builder();

        let mut mentors: HashMap<String, MentorId> = HashMap::new();
        for row in mentor_rows {
            if mentors.contains_key(&row.key) {
                return Err(DatasetImportError::DuplicateMentor(row.key));
            }
            let id = builder.mentor(Mentor {
                first_name: row.first_name,
                last_name: row.last_name,
                nickname: row.nickname,
                city: row.city,
                phone_number: row.phone_number,
                favorite_language: row.favorite_language,
            });
            mentors.insert(row.key, id);
        }

        let mut applicants: HashMap<String, ApplicantId> = HashMap::new();
        for row in applicant_rows {
            if applicants.contains_key(&row.key) {
                return Err(DatasetImportError::DuplicateApplicant(row.key));
            }
            let key = row.key.clone();
            let id = builder.applicant(applicant_from_row(row)?);
            applicants.insert(key, id);
        }

        for row in school_rows {
            builder.school(School {
                name: row.name,
                city: row.city,
                country: row.country,
            });
        }

        for row in application_rows {
            let mentor = *mentors
                .get(&row.mentor)
                .ok_or(DatasetImportError::UnknownMentor(row.mentor))?;
            let applicant = *applicants
                .get(&row.applicant)
                .ok_or(DatasetImportError::UnknownApplicant(row.applicant))?;
            builder.application(mentor, applicant, row.applied_on)?;
        }

        let dataset = builder.build();
        debug!(
            mentors = dataset.mentors().len(),
            applicants = dataset.applicants().len(),
            schools = dataset.schools().len(),
            applications = dataset.applications().len(),
            "dataset imported"
        );
        Ok(dataset)
    }
}

fn open(dir: &Path, file: &str) -> Result<File, DatasetImportError> {
    let path = dir.join(file);
    File::open(&path).map_err(|source| DatasetImportError::Io { path, source })
}

fn rows<R, T>(reader: R, file: &'static str) -> Result<Vec<T>, DatasetImportError>
where
    R: Read,
    T: serde::de::DeserializeOwned,
{
    parse_rows(reader).map_err(|source| DatasetImportError::Csv { file, source })
}

fn applicant_from_row(row: ApplicantRow) -> Result<Applicant, DatasetImportError> {
    let start_date = match row.start_date {
        None => None,
        Some(value) => match parse_date(&value) {
            Some(date) => Some(date),
            None => {
                return Err(DatasetImportError::InvalidStartDate {
                    key: row.key,
                    value,
                })
            }
        },
    };

    match (row.status, start_date) {
        (ApplicationStatus::Approved, Some(start_date)) => Ok(Applicant::approved(
            row.first_name,
            row.last_name,
            row.phone_number,
            row.email,
            start_date,
        )),
        (status, None) => Ok(Applicant::new(
            row.first_name,
            row.last_name,
            row.phone_number,
            row.email,
            status,
        )),
        (status, Some(_)) => Err(DatasetImportError::StartDateWithoutApproval {
            key: row.key,
            status,
        }),
    }
}
