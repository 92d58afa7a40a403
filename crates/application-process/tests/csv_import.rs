use application_process::admissions::{
    reference_dataset, ApplicationRepository, ApplicationStatus, City, DatasetImportError,
    DatasetImporter, DatasetSources, InMemoryRepository,
};
use chrono::NaiveDate;
use std::path::Path;

const MENTORS: &str = "key,first_name,last_name,nickname,city,phone_number,favorite_language\n\
ada,Ada,Lovelace,,warsaw,100,Rust\n\
alan,Alan,Turing,Prof,bucharest,200,Haskell\n";
const APPLICANTS: &str = "key,first_name,last_name,phone_number,email,status,start_date\n\
bea,Bea,Kiss,300,bea@example.com,approved,2021-03-01\n\
cid,Cid,Nagy,400,cid@example.com,applied,\n";
const SCHOOLS: &str = "name,city,country\nWarsaw Campus,warsaw,Poland\n";
const APPLICATIONS: &str = "mentor,applicant,applied_on\n\
ada,bea,2020-11-05\n\
alan,cid,2020-12-24\n\
ada,cid,2021-01-02\n";

fn import(
    mentors: &str,
    applicants: &str,
    schools: &str,
    applications: &str,
) -> Result<application_process::admissions::Dataset, DatasetImportError> {
    DatasetImporter::from_readers(DatasetSources {
        mentors: mentors.as_bytes(),
        applicants: applicants.as_bytes(),
        schools: schools.as_bytes(),
        applications: applications.as_bytes(),
    })
}

#[test]
fn importer_builds_linked_dataset() {
    let dataset = import(MENTORS, APPLICANTS, SCHOOLS, APPLICATIONS).expect("import succeeds");

    assert_eq!(dataset.mentors().len(), 2);
    assert_eq!(dataset.mentors()[1].nickname.as_deref(), Some("Prof"));
    assert!(dataset.mentors()[0].nickname.is_none());
    assert_eq!(dataset.schools()[0].city, City::Warsaw);

    let bea = &dataset.applicants()[0];
    assert_eq!(bea.status, ApplicationStatus::Approved);
    assert_eq!(bea.start_date(), NaiveDate::from_ymd_opt(2021, 3, 1));

    let repo = InMemoryRepository::new(dataset);
    let of_ada: Vec<_> = repo
        .applicants_of("Ada")
        .map(|applicant| applicant.email.as_str())
        .collect();
    assert_eq!(of_ada, ["bea@example.com", "cid@example.com"]);
    assert_eq!(
        repo.amount_of_applications_after(NaiveDate::from_ymd_opt(2020, 12, 24).expect("valid")),
        1
    );
    assert_eq!(repo.mentors_from(City::Bucharest).count(), 1);
}

#[test]
fn importer_rejects_unknown_mentor_reference() {
    let applications = "mentor,applicant,applied_on\ngrace,bea,2020-11-05\n";
    match import(MENTORS, APPLICANTS, SCHOOLS, applications) {
        Err(DatasetImportError::UnknownMentor(key)) => assert_eq!(key, "grace"),
        other => panic!("expected unknown mentor, got {other:?}"),
    }
}

#[test]
fn importer_rejects_unknown_applicant_reference() {
    let applications = "mentor,applicant,applied_on\nada,zed,2020-11-05\n";
    match import(MENTORS, APPLICANTS, SCHOOLS, applications) {
        Err(DatasetImportError::UnknownApplicant(key)) => assert_eq!(key, "zed"),
        other => panic!("expected unknown applicant, got {other:?}"),
    }
}

#[test]
fn importer_rejects_duplicate_keys() {
    let mentors = format!("{MENTORS}ada,Ada,Again,,warsaw,101,C\n");
    match import(&mentors, APPLICANTS, SCHOOLS, APPLICATIONS) {
        Err(DatasetImportError::DuplicateMentor(key)) => assert_eq!(key, "ada"),
        other => panic!("expected duplicate mentor, got {other:?}"),
    }

    let applicants = format!("{APPLICANTS}bea,Bea,Twin,301,twin@example.com,applied,\n");
    match import(MENTORS, &applicants, SCHOOLS, APPLICATIONS) {
        Err(DatasetImportError::DuplicateApplicant(key)) => assert_eq!(key, "bea"),
        other => panic!("expected duplicate applicant, got {other:?}"),
    }
}

#[test]
fn importer_rejects_start_date_without_approval() {
    let applicants = "key,first_name,last_name,phone_number,email,status,start_date\n\
bea,Bea,Kiss,300,bea@example.com,rejected,2021-03-01\n";
    match import(MENTORS, applicants, SCHOOLS, "mentor,applicant,applied_on\n") {
        Err(DatasetImportError::StartDateWithoutApproval { key, status }) => {
            assert_eq!(key, "bea");
            assert_eq!(status, ApplicationStatus::Rejected);
        }
        other => panic!("expected start date violation, got {other:?}"),
    }
}

#[test]
fn importer_reports_malformed_start_date_and_csv() {
    let applicants = "key,first_name,last_name,phone_number,email,status,start_date\n\
bea,Bea,Kiss,300,bea@example.com,approved,next spring\n";
    match import(MENTORS, applicants, SCHOOLS, "mentor,applicant,applied_on\n") {
        Err(DatasetImportError::InvalidStartDate { key, value }) => {
            assert_eq!(key, "bea");
            assert_eq!(value, "next spring");
        }
        other => panic!("expected invalid start date, got {other:?}"),
    }

    let schools = "name,city,country\nVienna Campus,vienna,Austria\n";
    match import(MENTORS, APPLICANTS, schools, APPLICATIONS) {
        Err(DatasetImportError::Csv { file, .. }) => assert_eq!(file, "schools.csv"),
        other => panic!("expected csv error, got {other:?}"),
    }
}

#[test]
fn shipped_reference_fixture_matches_built_in_dataset() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/reference");
    let imported = DatasetImporter::from_dir(&dir).expect("reference fixture imports");

    assert_eq!(imported, reference_dataset());
}

#[test]
fn missing_directory_reports_io_error_with_path() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/does-not-exist");
    match DatasetImporter::from_dir(&dir) {
        Err(DatasetImportError::Io { path, .. }) => {
            assert_eq!(path, dir.join("mentors.csv"));
        }
        other => panic!("expected io error, got {other:?}"),
    }
}
