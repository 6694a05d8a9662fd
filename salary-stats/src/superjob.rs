use reqwest::Client;
use serde::Deserialize;

use crate::source::{drain_flagged_pages, FlaggedPage, SalaryRange, VacancySource};
use crate::{Error, Result, QUERY_PREFIX};

const BASE_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
const ACCEPTED_CURRENCY: &str = "rub";
const APP_ID_HEADER: &str = "X-Api-App-Id";

/// Search filters for the SuperJob vacancy API.
#[derive(Debug, Clone)]
pub struct SjSearchConfig {
    pub base_url: String,
    pub town: String,
    /// Results per page.
    pub count: u32,
}

impl Default for SjSearchConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            town: "Москва".to_string(),
            count: 100,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    objects: Vec<Vacancy>,
    total: u64,
    more: bool,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    currency: String,
    payment_from: u64,
    payment_to: u64,
}

pub struct SjClient {
    client: Client,
    app_id: String,
    config: SjSearchConfig,
}

impl SjClient {
    /// `app_id` is the application secret sent with every request.
    pub fn new(app_id: String, config: SjSearchConfig) -> Self {
        Self {
            client: Client::new(),
            app_id,
            config,
        }
    }

    async fn search_page(&self, language: &str, page: u32) -> Result<FlaggedPage> {
        let keyword = format!("{QUERY_PREFIX} {language}");
        log::debug!(
            "requesting superjob vacancies, page: {}, keyword: {}",
            page,
            keyword
        );
        let response = self
            .client
            .get(&self.config.base_url)
            .header(APP_ID_HEADER, &self.app_id)
            .query(&[
                ("keyword", keyword.clone()),
                ("town", self.config.town.clone()),
                ("count", self.config.count.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            let url = response.url().to_string();
            let error_body = response.text().await;
            log::error!(
                "superjob request failed, page: {}, keyword: {}, error resp body: {:?}",
                page,
                keyword,
                error_body,
            );
            return Err(Error::RequestNotOk(url));
        }
        let body: SearchResponse = response.json().await?;
        Ok(FlaggedPage {
            items: body
                .objects
                .into_iter()
                .filter_map(extract_salary_range)
                .collect(),
            total: body.total,
            more: body.more,
        })
    }
}

// SuperJob reports an unknown bound as 0, not null.
fn extract_salary_range(vacancy: Vacancy) -> Option<SalaryRange> {
    if vacancy.currency != ACCEPTED_CURRENCY {
        return None;
    }
    Some(SalaryRange {
        from: (vacancy.payment_from > 0).then_some(vacancy.payment_from),
        to: (vacancy.payment_to > 0).then_some(vacancy.payment_to),
    })
}

impl VacancySource for SjClient {
    async fn fetch_all_pages(&self, language: &str) -> Result<(u64, Vec<SalaryRange>)> {
        drain_flagged_pages(|page| self.search_page(language, page)).await
    }
}
