//! Dashboard aggregates: headline counts and the recent-signal feed.

use serde::Serialize;

use crate::entities::{Company, Signal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_companies: usize,
    pub total_signals: usize,
    pub active_lists: usize,
    pub saved_searches: usize,
}

impl DashboardStats {
    #[must_use]
    pub fn compute(companies: &[Company], active_lists: usize, saved_searches: usize) -> Self {
        Self {
            total_companies: companies.len(),
            total_signals: companies.iter().map(|c| c.signals.len()).sum(),
            active_lists,
            saved_searches,
        }
    }
}

/// A signal annotated with the company it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalFeedItem {
    pub company_id: String,
    pub company_name: String,
    #[serde(flatten)]
    pub signal: Signal,
}

/// The `limit` newest signals across all companies. Ties keep catalog order.
#[must_use]
pub fn recent_signals(companies: &[Company], limit: usize) -> Vec<SignalFeedItem> {
    let mut feed: Vec<SignalFeedItem> = companies
        .iter()
        .flat_map(|company| {
            company.signals.iter().map(|signal| SignalFeedItem {
                company_id: company.id.clone(),
                company_name: company.name.clone(),
                signal: signal.clone(),
            })
        })
        .collect();
    feed.sort_by(|a, b| b.signal.date.cmp(&a.signal.date));
    feed.truncate(limit);
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{SignalType, Stage};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn signal(id: &str, date: (i32, u32, u32)) -> Signal {
        Signal {
            id: id.into(),
            kind: SignalType::News,
            title: format!("title {id}"),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    fn company(id: &str, signals: Vec<Signal>) -> Company {
        Company {
            id: id.into(),
            name: format!("Company {id}"),
            website: String::new(),
            logo: String::new(),
            description: String::new(),
            sector: "Database".into(),
            stage: Stage::Seed,
            location: String::new(),
            founded_year: 2020,
            total_funding: "$1M".into(),
            last_funding_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            tags: vec![],
            signals,
        }
    }

    #[test]
    fn stats_count_signals_across_companies() {
        let companies = vec![
            company("1", vec![signal("s1", (2024, 1, 15)), signal("s2", (2023, 9, 12))]),
            company("2", vec![signal("s3", (2021, 12, 9))]),
        ];
        let stats = DashboardStats::compute(&companies, 2, 5);
        assert_eq!(
            stats,
            DashboardStats {
                total_companies: 2,
                total_signals: 3,
                active_lists: 2,
                saved_searches: 5,
            }
        );
    }

    #[test]
    fn recent_signals_are_newest_first_and_truncated() {
        let companies = vec![
            company("1", vec![signal("s1", (2024, 1, 15)), signal("s2", (2023, 9, 12))]),
            company("2", vec![signal("s3", (2024, 7, 15))]),
        ];
        let feed = recent_signals(&companies, 2);
        let ids: Vec<&str> = feed.iter().map(|f| f.signal.id.as_str()).collect();
        assert_eq!(ids, vec!["s3", "s1"]);
        assert_eq!(feed[0].company_name, "Company 2");
    }
}
