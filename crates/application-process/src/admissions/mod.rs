//! Mentors, applicants, schools and applications for the admissions process,
//! plus the read-only queries the console runs over them.

pub mod dataset;
pub mod domain;
pub mod fixture;
pub mod import;
pub mod repository;

#[cfg(test)]
mod tests;

pub use dataset::{Dataset, DatasetBuilder, DatasetError};
pub use domain::{
    Applicant, ApplicantId, Application, ApplicationStatus, City, Mentor, MentorId, School,
    UnknownApplicationStatus, UnknownCity,
};
pub use fixture::reference_dataset;
pub use import::{DatasetImportError, DatasetImporter, DatasetSources};
pub use repository::{ApplicationRepository, InMemoryRepository};
