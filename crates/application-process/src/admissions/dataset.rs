use chrono::NaiveDate;

use super::domain::{Applicant, ApplicantId, Application, Mentor, MentorId, School};

/// Ordered, read-only collections backing the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    mentors: Vec<Mentor>,
    applicants: Vec<Applicant>,
    schools: Vec<School>,
    applications: Vec<Application>,
}

impl Dataset {
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn mentor(&self, id: MentorId) -> Option<&Mentor> {
        self.mentors.get(id.0)
    }

    pub fn applicant(&self, id: ApplicantId) -> Option<&Applicant> {
        self.applicants.get(id.0)
    }

    pub fn is_empty(&self) -> bool {
        self.mentors.is_empty()
            && self.applicants.is_empty()
            && self.schools.is_empty()
            && self.applications.is_empty()
    }
}

/// Application link that does not resolve inside the builder it was given to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("application references {0:?}, which this dataset does not hold")]
    UnknownMentor(MentorId),
    #[error("application references {0:?}, which this dataset does not hold")]
    UnknownApplicant(ApplicantId),
}

/// Collects entities in insertion order and hands out the ids applications link to.
///
/// Ids are only meaningful for the builder (and resulting dataset) that issued them.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    pub fn mentor(&mut self, mentor: Mentor) -> MentorId {
        self.dataset.mentors.push(mentor);
        MentorId(self.dataset.mentors.len() - 1)
    }

    pub fn applicant(&mut self, applicant: Applicant) -> ApplicantId {
        self.dataset.applicants.push(applicant);
        ApplicantId(self.dataset.applicants.len() - 1)
    }

    pub fn school(&mut self, school: School) -> &mut Self {
        self.dataset.schools.push(school);
        self
    }

    pub fn application(
        &mut self,
        mentor: MentorId,
        applicant: ApplicantId,
        applied_on: NaiveDate,
    ) -> Result<&mut Self, DatasetError> {
        if self.dataset.mentor(mentor).is_none() {
            return Err(DatasetError::UnknownMentor(mentor));
        }
        if self.dataset.applicant(applicant).is_none() {
            return Err(DatasetError::UnknownApplicant(applicant));
        }

        self.dataset.applications.push(Application {
            mentor,
            applicant,
            applied_on,
        });
        Ok(self)
    }

    pub fn build(self) -> Dataset {
        self.dataset
    }
}
