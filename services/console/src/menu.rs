use crate::infra::{city_for_menu_key, parse_date};
use crate::render::write_lines;
use application_process::admissions::{ApplicationRepository, City};
use std::io::{self, BufRead, Write};
use tracing::debug;

const MENU: &str = "Welcome to the Codecool application system
---------------------
Please choose a menu item:
    1 - Get all mentors
    2 - Amount of applications
    3 - Whose favourite language is...
    4 - Get mentor's applicants
    5 - Get applied students email list
---------------------
If you want to exit press 'e'.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    MentorsFromCity,
    ApplicationsAfter,
    MentorsByLanguage,
    ApplicantsOfMentor,
    StudentEmails,
    Exit,
}

impl MenuItem {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "1" => Some(Self::MentorsFromCity),
            "2" => Some(Self::ApplicationsAfter),
            "3" => Some(Self::MentorsByLanguage),
            "4" => Some(Self::ApplicantsOfMentor),
            "5" => Some(Self::StudentEmails),
            "e" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the session can keep reading or the input stream is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    EndOfInput,
}

/// Interactive loop over any line source and sink so it can run against a
/// terminal or in-memory buffers.
pub(crate) struct MenuSession<'r, R, I, O> {
    repository: &'r R,
    input: I,
    output: O,
}

impl<'r, R, I, O> MenuSession<'r, R, I, O>
where
    R: ApplicationRepository,
    I: BufRead,
    O: Write,
{
    pub(crate) fn new(repository: &'r R, input: I, output: O) -> Self {
        Self {
            repository,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> O {
        self.output
    }

    /// Runs until the user picks `e` or input ends.
    pub(crate) fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            let item = match MenuItem::from_key(line.trim()) {
                Some(item) => item,
                None => {
                    debug!(selection = %line, "rejected menu selection");
                    writeln!(self.output, "Invalid menu option, choose again.")?;
                    continue;
                }
            };

            let flow = match item {
                MenuItem::MentorsFromCity => self.mentors_from_city()?,
                MenuItem::ApplicationsAfter => self.applications_after()?,
                MenuItem::MentorsByLanguage => self.mentors_by_language()?,
                MenuItem::ApplicantsOfMentor => self.applicants_of_mentor()?,
                MenuItem::StudentEmails => self.student_emails()?,
                MenuItem::Exit => return Ok(()),
            };
            if flow == Flow::EndOfInput {
                return Ok(());
            }

            writeln!(self.output, "\nPress Enter to return to the menu.")?;
            self.output.flush()?;
            if self.read_line()?.is_none() {
                return Ok(());
            }
        }
    }

    fn mentors_from_city(&mut self) -> io::Result<Flow> {
        let city = loop {
            writeln!(self.output, "Which city are you interested in:")?;
            for (position, city) in City::ordered().iter().enumerate() {
                writeln!(self.output, "    {} - {}", position + 1, city)?;
            }
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Flow::EndOfInput);
            };
            match city_for_menu_key(&line) {
                Some(city) => break city,
                None => {
                    debug!(selection = %line, "rejected city selection");
                    writeln!(self.output, "Invalid city option, choose again.")?;
                }
            }
        };

        writeln!(self.output, "Mentors in {city}:\n")?;
        write_lines(&mut self.output, self.repository.mentors_from(city))?;
        Ok(Flow::Continue)
    }

    fn applications_after(&mut self) -> io::Result<Flow> {
        let date = loop {
            writeln!(self.output, "Please give start date:")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Flow::EndOfInput);
            };
            match parse_date(&line) {
                Ok(date) => break date,
                Err(reason) => debug!(%reason, "rejected date input"),
            }
        };

        let amount = self.repository.amount_of_applications_after(date);
        writeln!(self.output, "Applications after {date}: {amount}")?;
        Ok(Flow::Continue)
    }

    fn mentors_by_language(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Which language are you looking for?")?;
        self.output.flush()?;
        let Some(language) = self.read_line()? else {
            return Ok(Flow::EndOfInput);
        };

        writeln!(
            self.output,
            "Mentors with the specified favourite programming language:\n"
        )?;
        write_lines(
            &mut self.output,
            self.repository.mentors_with_favorite_language(&language),
        )?;
        Ok(Flow::Continue)
    }

    fn applicants_of_mentor(&mut self) -> io::Result<Flow> {
        writeln!(
            self.output,
            "Which mentor's applicant would you like to see?\n"
        )?;
        self.output.flush()?;
        let Some(mentor) = self.read_line()? else {
            return Ok(Flow::EndOfInput);
        };

        writeln!(self.output, "Applicants of {mentor}:\n")?;
        write_lines(&mut self.output, self.repository.applicants_of(&mentor))?;
        Ok(Flow::Continue)
    }

    fn student_emails(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Email list of students:\n")?;
        write_lines(&mut self.output, self.repository.applied_student_emails())?;
        Ok(Flow::Continue)
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Runs the menu against the process's stdin and stdout.
pub(crate) fn run_interactive<R: ApplicationRepository>(repository: &R) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    MenuSession::new(repository, stdin.lock(), stdout.lock()).run()
}
