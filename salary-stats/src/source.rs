use std::future::Future;

use crate::salary::estimate_rub_salary;
use crate::stats::{aggregate, LanguageSummary};
use crate::Result;

/// Salary bounds of one vacancy, already filtered to the source's
/// accepted currency.
#[derive(Debug, Clone)]
pub struct SalaryRange {
    pub from: Option<u64>,
    pub to: Option<u64>,
}

/// One page from a service that reports the total page count in every
/// response (HeadHunter).
#[derive(Debug, Clone)]
pub struct CountedPage {
    pub items: Vec<SalaryRange>,
    pub found: u64,
    pub total_pages: u32,
}

/// One page from a service that reports whether further pages exist
/// (SuperJob).
#[derive(Debug, Clone)]
pub struct FlaggedPage {
    pub items: Vec<SalaryRange>,
    pub total: u64,
    pub more: bool,
}

/// A job service that can return every vacancy matching one language,
/// across all pages, together with the service-reported found total.
#[allow(async_fn_in_trait)]
pub trait VacancySource {
    async fn fetch_all_pages(&self, language: &str) -> Result<(u64, Vec<SalaryRange>)>;
}

/// Walks pages `0..total_pages`, re-reading the page count from every
/// response: the real count is only known once page 0 has returned.
/// Any page error aborts the whole language.
pub async fn drain_counted_pages<F, Fut>(mut fetch: F) -> Result<(u64, Vec<SalaryRange>)>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<CountedPage>>,
{
    let mut items = Vec::new();
    let mut found = 0;
    let mut page = 0;
    let mut total_pages = 1;
    while page < total_pages {
        let response = fetch(page).await?;
        items.extend(response.items);
        found = response.found;
        total_pages = response.total_pages;
        page += 1;
    }
    Ok((found, items))
}

/// Walks pages from 0, stopping after the first response that reports
/// no further pages. Any page error aborts the whole language.
pub async fn drain_flagged_pages<F, Fut>(mut fetch: F) -> Result<(u64, Vec<SalaryRange>)>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<FlaggedPage>>,
{
    let mut items = Vec::new();
    let mut page = 0;
    loop {
        let response = fetch(page).await?;
        items.extend(response.items);
        if !response.more {
            return Ok((response.total, items));
        }
        page += 1;
    }
}

/// Surveys one source for every language in order: fetch all pages,
/// estimate each vacancy, aggregate into a summary row. Strictly
/// sequential, one request in flight at a time.
pub async fn survey<S: VacancySource>(
    source: &S,
    languages: &[&str],
) -> Result<Vec<(String, LanguageSummary)>> {
    let mut rows = Vec::with_capacity(languages.len());
    for language in languages {
        let (found, vacancies) = source.fetch_all_pages(language).await?;
        let estimates: Vec<u64> = vacancies
            .iter()
            .filter_map(|range| estimate_rub_salary(range.from, range.to))
            .collect();
        log::debug!(
            "{}: {} vacancies found, {} with usable salary",
            language,
            found,
            estimates.len()
        );
        rows.push(((*language).to_owned(), aggregate(found, &estimates)));
    }
    Ok(rows)
}
