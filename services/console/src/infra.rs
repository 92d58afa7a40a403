use application_process::admissions::{City, DatasetImporter, InMemoryRepository};
use application_process::config::DataConfig;
use application_process::error::AppError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::info;

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d", "%Y. %m. %d."];
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Accepts a calendar date, optionally followed by a time of day that is dropped.
pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    for date_format in DATE_FORMATS {
        for time_format in TIME_FORMATS {
            for separator in [" ", "T"] {
                let format = format!("{date_format}{separator}{time_format}");
                if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, &format) {
                    return Ok(datetime.date());
                }
            }
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }

    Err(format!("failed to parse '{raw}' as a date (expected YYYY-MM-DD)"))
}

pub(crate) fn parse_city(raw: &str) -> Result<City, String> {
    raw.parse::<City>().map_err(|err| {
        let known: Vec<_> = City::ordered().iter().map(|city| city.label()).collect();
        format!("{err} (expected one of {})", known.join(", "))
    })
}

/// Menu keys are 1-based positions in `City::ordered()`.
pub(crate) fn city_for_menu_key(key: &str) -> Option<City> {
    let position = key.trim().parse::<usize>().ok()?;
    let index = position.checked_sub(1)?;
    City::ordered().get(index).copied()
}

pub(crate) fn load_repository(config: &DataConfig) -> Result<InMemoryRepository, AppError> {
    let repository = match &config.dataset_dir {
        Some(dir) => {
            let dataset = DatasetImporter::from_dir(dir)?;
            info!(dir = %dir.display(), "loaded dataset from CSV exports");
            InMemoryRepository::new(dataset)
        }
        None => {
            info!("using built-in reference dataset");
            InMemoryRepository::seeded()
        }
    };

    let dataset = repository.dataset();
    info!(
        mentors = dataset.mentors().len(),
        applicants = dataset.applicants().len(),
        schools = dataset.schools().len(),
        applications = dataset.applications().len(),
        "admissions dataset ready"
    );
    Ok(repository)
}
