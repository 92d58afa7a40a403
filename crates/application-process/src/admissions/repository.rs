use chrono::NaiveDate;
use tracing::warn;

use super::dataset::Dataset;
use super::domain::{Applicant, City, Mentor};
use super::fixture::reference_dataset;

/// Read-only queries the console menu runs against the admissions data.
///
/// Every query is total: an unmatched input yields zero or an empty sequence.
/// Sequences borrow from the repository and preserve dataset order.
pub trait ApplicationRepository {
    /// Number of applications dated strictly after `date`.
    fn amount_of_applications_after(&self, date: NaiveDate) -> usize;

    fn mentors_from(&self, city: City) -> impl Iterator<Item = &Mentor>;

    /// Exact, case-sensitive comparison against the mentor's favorite language.
    fn mentors_with_favorite_language<'a>(
        &'a self,
        language: &'a str,
    ) -> impl Iterator<Item = &'a Mentor> + 'a;

    /// Applicants of every application whose mentor has the given first name,
    /// in application order and including repeats.
    ///
    /// Matching is on first name only, so two mentors sharing a first name both
    /// contribute their applicants.
    fn applicants_of<'a>(
        &'a self,
        mentor_first_name: &'a str,
    ) -> impl Iterator<Item = &'a Applicant> + 'a;

    /// Email of every applicant, whatever their status.
    fn applied_student_emails(&self) -> impl Iterator<Item = &str>;
}

/// Repository over a dataset held in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    dataset: Dataset,
}

impl InMemoryRepository {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Repository seeded with the reference sample data.
    pub fn seeded() -> Self {
        Self::new(reference_dataset())
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn mentors_named<'a>(
        &'a self,
        first_name: &'a str,
    ) -> impl Iterator<Item = &'a Mentor> + 'a {
        self.dataset
            .mentors()
            .iter()
            .filter(move |mentor| mentor.first_name == first_name)
    }
}

impl ApplicationRepository for InMemoryRepository {
    fn amount_of_applications_after(&self, date: NaiveDate) -> usize {
        self.dataset
            .applications()
            .iter()
            .filter(|application| application.applied_on > date)
            .count()
    }

    fn mentors_from(&self, city: City) -> impl Iterator<Item = &Mentor> {
        self.dataset
            .mentors()
            .iter()
            .filter(move |mentor| mentor.city == city)
    }

    fn mentors_with_favorite_language<'a>(
        &'a self,
        language: &'a str,
    ) -> impl Iterator<Item = &'a Mentor> + 'a {
        self.dataset
            .mentors()
            .iter()
            .filter(move |mentor| mentor.favorite_language == language)
    }

    fn applicants_of<'a>(
        &'a self,
        mentor_first_name: &'a str,
    ) -> impl Iterator<Item = &'a Applicant> + 'a {
        if self.mentors_named(mentor_first_name).nth(1).is_some() {
            warn!(
                mentor_first_name,
                "several mentors share this first name; listing applicants of all of them"
            );
        }

        let dataset = &self.dataset;
        dataset
            .applications()
            .iter()
            .filter(move |application| {
                dataset
                    .mentor(application.mentor)
                    .is_some_and(|mentor| mentor.first_name == mentor_first_name)
            })
            .filter_map(move |application| dataset.applicant(application.applicant))
    }

    fn applied_student_emails(&self) -> impl Iterator<Item = &str> {
        self.dataset
            .applicants()
            .iter()
            .map(|applicant| applicant.email.as_str())
    }
}
