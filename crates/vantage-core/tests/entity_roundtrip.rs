//! Serde roundtrip and JsonSchema validation tests for persisted entity types.

use chrono::{NaiveDate, Utc};
use schemars::schema_for;
use vantage_core::entities::*;
use vantage_core::enums::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    company_roundtrip,
    Company,
    Company {
        id: "1".into(),
        name: "Linear".into(),
        website: "https://linear.app".into(),
        logo: "https://picsum.photos/seed/linear/100/100".into(),
        description: "The issue tracking tool you'll actually enjoy using.".into(),
        sector: "Enterprise Software".into(),
        stage: Stage::SeriesB,
        location: "San Francisco, CA".into(),
        founded_year: 2019,
        total_funding: "$52M".into(),
        last_funding_date: NaiveDate::from_ymd_opt(2023, 9, 12).unwrap(),
        tags: vec!["SaaS".into(), "DevTools".into()],
        signals: vec![Signal {
            id: "s1".into(),
            kind: SignalType::Product,
            title: "Launched Linear Asks".into(),
            description: "New customer support integration.".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }],
    }
);

roundtrip_and_validate!(
    company_list_roundtrip,
    CompanyList,
    CompanyList {
        id: "lst-a3f8b2c1".into(),
        name: "Seed Bets".into(),
        company_ids: vec!["1".into(), "2".into(), "3".into()],
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    saved_search_roundtrip,
    SavedSearch,
    SavedSearch {
        id: "srch-0b1c2d3e".into(),
        name: "Search: fintech (Fintech/Growth)".into(),
        query: "fintech".into(),
        filters: SearchFilters {
            sector: SectorFilter::Sector("Fintech".into()),
            stage: StageFilter::Only(Stage::Growth),
        },
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    enrichment_full_roundtrip,
    EnrichmentRecord,
    EnrichmentRecord {
        summary: Some("Issue tracking for software teams.".into()),
        what_they_do: Some(vec![
            "Issue tracking".into(),
            "Project planning".into(),
            "Roadmaps".into(),
        ]),
        keywords: Some(vec!["SaaS".into(), "DevTools".into()]),
        derived_signals: Some(vec!["Changelog present".into()]),
        sources: vec![Source {
            url: "https://linear.app".into(),
            timestamp: Utc::now(),
        }],
    }
);

roundtrip_and_validate!(
    enrichment_degraded_roundtrip,
    EnrichmentRecord,
    EnrichmentRecord {
        sources: vec![Source {
            url: "https://ramp.com".into(),
            timestamp: Utc::now(),
        }],
        ..Default::default()
    }
);

#[test]
fn company_reads_camel_case_fixture_document() {
    let json = r#"{
        "id": "3",
        "name": "Supabase",
        "website": "https://supabase.com",
        "logo": "https://picsum.photos/seed/supabase/100/100",
        "description": "The Open Source Firebase Alternative.",
        "sector": "Database",
        "stage": "Series B",
        "location": "Remote",
        "foundedYear": 2020,
        "totalFunding": "$116M",
        "lastFundingDate": "2022-05-10",
        "tags": ["Open Source", "PostgreSQL", "Backend"],
        "signals": [
            { "id": "s4", "type": "hiring", "title": "Aggressive Engineering Hiring",
              "description": "Opening 20+ roles in core database team.", "date": "2024-02-01" }
        ]
    }"#;
    let company: Company = serde_json::from_str(json).unwrap();
    assert_eq!(company.stage, Stage::SeriesB);
    assert_eq!(company.signals[0].kind, SignalType::Hiring);
    assert_eq!(company.founded_year, 2020);
}
