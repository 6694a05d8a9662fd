pub mod headhunter;
pub mod report;
pub mod salary;
pub mod source;
pub mod stats;
pub mod superjob;

use thiserror::Error;

/// Languages surveyed on every run, in report order. The same slice
/// drives the search queries of both services.
pub const LANGUAGES: [&str; 8] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
];

/// Both services are queried with "{QUERY_PREFIX} {language}".
pub const QUERY_PREFIX: &str = "Программист";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request not successful: '{0}'")]
    RequestNotOk(String),
    #[error("Credential not set: '{0}'")]
    MissingCredential(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

pub use headhunter::{HhClient, HhSearchConfig};
pub use report::render_table;
pub use salary::estimate_rub_salary;
pub use source::{survey, SalaryRange, VacancySource};
pub use stats::{aggregate, LanguageSummary};
pub use superjob::{SjClient, SjSearchConfig};
