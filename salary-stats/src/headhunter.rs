use reqwest::Client;
use serde::Deserialize;

use crate::source::{drain_counted_pages, CountedPage, SalaryRange, VacancySource};
use crate::{Error, Result, QUERY_PREFIX};

const BASE_URL: &str = "https://api.hh.ru/vacancies";
const ACCEPTED_CURRENCY: &str = "RUR";

/// Search filters for the HeadHunter vacancy API.
#[derive(Debug, Clone)]
pub struct HhSearchConfig {
    pub base_url: String,
    /// HeadHunter area code; 1 is Moscow.
    pub area: u32,
    /// Only vacancies published within this many days.
    pub period_days: u32,
    pub per_page: u32,
}

impl Default for HhSearchConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            area: 1,
            period_days: 30,
            per_page: 100,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<Vacancy>,
    found: u64,
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    currency: Option<String>,
    from: Option<u64>,
    to: Option<u64>,
}

pub struct HhClient {
    client: Client,
    config: HhSearchConfig,
}

impl HhClient {
    pub fn new(config: HhSearchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn search_page(&self, language: &str, page: u32) -> Result<CountedPage> {
        let query = format!("{QUERY_PREFIX} {language}");
        log::debug!("requesting hh vacancies, page: {}, query: {}", page, query);
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("text", query.clone()),
                ("area", self.config.area.to_string()),
                ("period", self.config.period_days.to_string()),
                ("per_page", self.config.per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            let url = response.url().to_string();
            let error_body = response.text().await;
            log::error!(
                "hh request failed, page: {}, query: {}, error resp body: {:?}",
                page,
                query,
                error_body,
            );
            return Err(Error::RequestNotOk(url));
        }
        let body: SearchResponse = response.json().await?;
        Ok(CountedPage {
            items: body
                .items
                .into_iter()
                .filter_map(extract_salary_range)
                .collect(),
            found: body.found,
            total_pages: body.pages,
        })
    }
}

fn extract_salary_range(vacancy: Vacancy) -> Option<SalaryRange> {
    let salary = vacancy.salary?;
    if salary.currency.as_deref() != Some(ACCEPTED_CURRENCY) {
        return None;
    }
    Some(SalaryRange {
        from: salary.from,
        to: salary.to,
    })
}

impl VacancySource for HhClient {
    async fn fetch_all_pages(&self, language: &str) -> Result<(u64, Vec<SalaryRange>)> {
        drain_counted_pages(|page| self.search_page(language, page)).await
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const PAGE_BODY: &str = r#"{
        "items": [
            {"salary": {"from": 100000, "to": 200000, "currency": "RUR", "gross": false}},
            {"salary": {"from": 1000, "to": 2000, "currency": "USD", "gross": true}},
            {"salary": null},
            {"salary": {"from": 50000, "to": null, "currency": "RUR", "gross": false}}
        ],
        "found": 256,
        "pages": 3,
        "per_page": 100,
        "page": 0
    }"#;

    #[test]
    fn deserializes_search_response() {
        let body: SearchResponse = serde_json::from_str(PAGE_BODY).unwrap();
        assert_eq!(body.found, 256);
        assert_eq!(body.pages, 3);
        assert_eq!(body.items.len(), 4);
    }

    #[test]
    fn keeps_only_rouble_salaries() {
        let body: SearchResponse = serde_json::from_str(PAGE_BODY).unwrap();
        let ranges: Vec<_> = body
            .items
            .into_iter()
            .filter_map(extract_salary_range)
            .collect();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].from, Some(100_000));
        assert_eq!(ranges[0].to, Some(200_000));
        assert_eq!(ranges[1].from, Some(50_000));
        assert_eq!(ranges[1].to, None);
    }
}
