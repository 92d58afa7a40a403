use crate::infra::{parse_city, parse_date};
use crate::render::write_lines;
use application_process::admissions::{ApplicationRepository, City};
use chrono::NaiveDate;
use clap::Subcommand;
use std::io::{self, Write};

#[derive(Subcommand, Debug)]
pub(crate) enum QueryCommand {
    /// List mentors working in a city
    MentorsFrom {
        /// Miskolc, Budapest, Krakow, Warsaw or Bucharest
        #[arg(long, value_parser = parse_city)]
        city: City,
    },
    /// List mentors whose favorite language matches exactly (case-sensitive)
    MentorsByLanguage {
        #[arg(long)]
        language: String,
    },
    /// List applicants of every mentor with the given first name
    ApplicantsOf {
        /// Mentor first name
        #[arg(long)]
        mentor: String,
    },
    /// Count applications dated strictly after a date
    ApplicationsAfter {
        /// Date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
    },
    /// Print the email address of every applicant
    Emails,
}

pub(crate) fn run_query<R, W>(
    command: QueryCommand,
    repository: &R,
    out: &mut W,
) -> io::Result<()>
where
    R: ApplicationRepository,
    W: Write,
{
    match command {
        QueryCommand::MentorsFrom { city } => {
            write_lines(out, repository.mentors_from(city))?;
        }
        QueryCommand::MentorsByLanguage { language } => {
            write_lines(out, repository.mentors_with_favorite_language(&language))?;
        }
        QueryCommand::ApplicantsOf { mentor } => {
            write_lines(out, repository.applicants_of(&mentor))?;
        }
        QueryCommand::ApplicationsAfter { date } => {
            writeln!(out, "{}", repository.amount_of_applications_after(date))?;
        }
        QueryCommand::Emails => {
            write_lines(out, repository.applied_student_emails())?;
        }
    }
    out.flush()
}
