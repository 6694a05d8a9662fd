use serde::Serialize;

/// Per-language result of surveying a single service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    /// Total matching count reported by the service.
    pub vacancies_found: u64,
    /// Vacancies that yielded a usable salary estimate.
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

/// Folds one language's usable estimates into a summary. `found` is
/// the service-reported total and is passed through unchanged.
pub fn aggregate(found: u64, estimates: &[u64]) -> LanguageSummary {
    let processed = estimates.len() as u64;
    let average = if processed > 0 {
        estimates.iter().sum::<u64>() / processed
    } else {
        0
    };
    LanguageSummary {
        vacancies_found: found,
        vacancies_processed: processed,
        average_salary: average,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn averages_estimates() {
        let summary = aggregate(10, &[100, 200, 300]);
        assert_eq!(
            summary,
            LanguageSummary {
                vacancies_found: 10,
                vacancies_processed: 3,
                average_salary: 200,
            }
        );
    }

    #[test]
    fn no_estimates_yield_zero_average() {
        let summary = aggregate(42, &[]);
        assert_eq!(
            summary,
            LanguageSummary {
                vacancies_found: 42,
                vacancies_processed: 0,
                average_salary: 0,
            }
        );
    }

    #[test]
    fn floors_uneven_sums() {
        assert_eq!(aggregate(2, &[100, 101]).average_salary, 100);
    }
}
