//! Reference sample data used when no dataset directory is configured.

use chrono::NaiveDate;

use super::dataset::{Dataset, DatasetError};
use super::domain::{Applicant, ApplicationStatus, City, Mentor, School};

fn mentor(
    first_name: &str,
    last_name: &str,
    nickname: Option<&str>,
    city: City,
    phone_number: &str,
    favorite_language: &str,
) -> Mentor {
    Mentor {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        nickname: nickname.map(str::to_string),
        city,
        phone_number: phone_number.to_string(),
        favorite_language: favorite_language.to_string(),
    }
}

fn school(name: &str, city: City, country: &str) -> School {
    School {
        name: name.to_string(),
        city,
        country: country.to_string(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("reference dates are valid calendar dates")
}

/// Seven mentors, five schools, nine applicants and nine applications, all of
/// them addressed to Attila Molnár.
pub fn reference_dataset() -> Dataset {
    seed().expect("reference applications link ids issued by the same builder")
}

fn seed() -> Result<Dataset, DatasetError> {
    let mut builder = Dataset::builder();

    let atesz = builder.mentor(mentor(
        "Attila",
        "Molnár",
        Some("Atesz"),
        City::Budapest,
        "123456789",
        "C#",
    ));
    builder.mentor(mentor(
        "Mátyás",
        "Fórián-Szabó",
        Some("Matyi"),
        City::Budapest,
        "987654321",
        "Java",
    ));
    builder.mentor(mentor(
        "Belián",
        "Radosza",
        None,
        City::Budapest,
        "123498765",
        "C#",
    ));
    builder.mentor(mentor(
        "Miklós",
        "Beöthy",
        Some("Miki"),
        City::Budapest,
        "987766789",
        "Ruby",
    ));
    builder.mentor(mentor(
        "Pál",
        "Monoczki",
        Some("Pakko"),
        City::Miskolc,
        "5432198765",
        "C#",
    ));
    builder.mentor(mentor(
        "Róbert",
        "Kohányi",
        Some("Robi"),
        City::Miskolc,
        "123454321",
        "Java",
    ));
    builder.mentor(mentor(
        "Mateus",
        "Ostafil",
        Some("Mati"),
        City::Krakow,
        "453454321",
        "Javascript",
    ));

    builder
        .school(school("Codecool Miskolc", City::Miskolc, "Hungary"))
        .school(school("Codecool Budapest", City::Budapest, "Hungary"))
        .school(school("Codecool Krakow", City::Krakow, "Poland"))
        .school(school("Codecool Warsaw", City::Warsaw, "Poland"))
        .school(school("Codecool Bucharest", City::Bucharest, "Romania"));

    let cohort_start = date(2019, 1, 1);
    let dominik = builder.applicant(Applicant::new(
        "Dominique",
        "Williams",
        "003630/734-4926",
        "dolor@laoreet.co.uk",
        ApplicationStatus::Applied,
    ));
    let jemima = builder.applicant(Applicant::new(
        "Jemima",
        "Foreman",
        "003620/834-6898",
        "magna@etultrices.net",
        ApplicationStatus::Applied,
    ));
    let zeph = builder.applicant(Applicant::approved(
        "Zeph",
        "Massey",
        "003630/216-5351",
        "a.feugiat.tellus@montesnasceturridiculus.co.uk",
        cohort_start,
    ));
    let joseph = builder.applicant(Applicant::approved(
        "Joseph",
        "Crawford",
        "003670/923-2669",
        "lacinia.mattis@arcu.co.uk",
        cohort_start,
    ));
    let ifeoma = builder.applicant(Applicant::approved(
        "Ifeoma",
        "Bird",
        "003630/465-8994",
        "diam.duis.mi@orcitinciduntadipiscing.com",
        cohort_start,
    ));
    let jemi = builder.applicant(Applicant::new(
        "Jemima",
        "Cantu",
        "003620/804-1652",
        "semper.pretium.neque@mauriseu.net",
        ApplicationStatus::Applied,
    ));
    let carol = builder.applicant(Applicant::new(
        "Carol",
        "Arnold",
        "003620/423-4261",
        "et.risus.quisque@mollis.co.uk",
        ApplicationStatus::Rejected,
    ));
    let jane = builder.applicant(Applicant::new(
        "Jane",
        "Forbes",
        "003630/179-1827",
        "dapibus.rutrum@litoratorquent.com",
        ApplicationStatus::Cancelled,
    ));
    let ursa = builder.applicant(Applicant::approved(
        "Ursa",
        "William",
        "003670/653-5392",
        "janiebaby@adipiscingenimmi.edu",
        date(2019, 5, 2),
    ));

    builder
        .application(atesz, dominik, date(2018, 9, 1))?
        .application(atesz, jemima, date(2018, 9, 1))?
        .application(atesz, zeph, date(2018, 9, 1))?
        .application(atesz, joseph, date(2018, 8, 1))?
        .application(atesz, ifeoma, date(2018, 8, 1))?
        .application(atesz, jemi, date(2018, 9, 1))?
        .application(atesz, carol, date(2018, 9, 1))?
        .application(atesz, jane, date(2019, 1, 1))?
        .application(atesz, ursa, date(2019, 1, 1))?;

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "valid calendar dates")]
    fn mistyped_reference_date_fails_loudly() {
        date(2019, 2, 30);
    }

    #[test]
    fn reference_applications_resolve() {
        let dataset = reference_dataset();
        assert!(dataset.applications().iter().all(|application| {
            dataset.mentor(application.mentor).is_some()
                && dataset.applicant(application.applicant).is_some()
        }));
        assert_eq!(
            dataset.applications().first().map(|a| a.applied_on),
            NaiveDate::from_ymd_opt(2018, 9, 1)
        );
    }
}
