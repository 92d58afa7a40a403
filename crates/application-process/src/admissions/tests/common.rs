use chrono::NaiveDate;

use crate::admissions::dataset::Dataset;
use crate::admissions::domain::{Applicant, ApplicationStatus, City, Mentor, School};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn mentor(first_name: &str, last_name: &str, city: City, language: &str) -> Mentor {
    Mentor {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        nickname: None,
        city,
        phone_number: "0000".to_string(),
        favorite_language: language.to_string(),
    }
}

pub(super) fn applicant(first_name: &str, status: ApplicationStatus) -> Applicant {
    Applicant::new(
        first_name,
        "Applicant",
        "1111",
        format!("{}@example.com", first_name.to_lowercase()),
        status,
    )
}

/// Two mentors named Anna in different cities, one applicant applying twice to
/// the same mentor, and a city (Bucharest) without anyone.
pub(super) fn small_dataset() -> Dataset {
    let mut builder = Dataset::builder();

    let anna_budapest = builder.mentor(mentor("Anna", "Kovács", City::Budapest, "Rust"));
    let anna_warsaw = builder.mentor(mentor("Anna", "Nowak", City::Warsaw, "rust"));
    let piotr = builder.mentor(mentor("Piotr", "Zieliński", City::Warsaw, "Go"));

    builder.school(School {
        name: "Warsaw Campus".to_string(),
        city: City::Warsaw,
        country: "Poland".to_string(),
    });

    let bea = builder.applicant(applicant("Bea", ApplicationStatus::Applied));
    let cyril = builder.applicant(Applicant::approved(
        "Cyril",
        "Applicant",
        "2222",
        "cyril@example.com",
        date(2021, 2, 1),
    ));
    let dora = builder.applicant(applicant("Dora", ApplicationStatus::Cancelled));

    for (mentor, applicant, applied_on) in [
        (anna_budapest, bea, date(2020, 6, 1)),
        (piotr, cyril, date(2020, 7, 15)),
        (anna_warsaw, dora, date(2020, 8, 1)),
        (anna_budapest, bea, date(2020, 9, 1)),
    ] {
        builder
            .application(mentor, applicant, applied_on)
            .expect("ids issued by this builder");
    }

    builder.build()
}
