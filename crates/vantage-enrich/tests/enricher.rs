//! Enrichment service behavior against a scripted generator.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use pretty_assertions::assert_eq;
use vantage_enrich::{
    ContentGenerator, EnrichError, EnrichRequest, Enricher, GenerateRequest, URL_REQUIRED,
};

/// Returns a fixed answer and records what it was asked.
struct ScriptedGenerator {
    answer: Result<String, (u16, String)>,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerateRequest>>,
}

impl ScriptedGenerator {
    fn answering(text: &str) -> Self {
        Self {
            answer: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    fn failing(status: u16, message: &str) -> Self {
        Self {
            answer: Err((status, message.to_string())),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ContentGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, EnrichError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.answer {
            Ok(text) => Ok(text.clone()),
            Err((status, message)) => Err(EnrichError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

const LINEAR_ANSWER: &str = r#"{
    "summary": "Linear is an issue tracker built for high-performance software teams.",
    "whatTheyDo": ["Issue tracking", "Project planning", "Product roadmaps"],
    "keywords": ["SaaS", "DevTools", "Project Management", "Productivity", "B2B"],
    "derivedSignals": ["Changelog present", "Careers page active"]
}"#;

#[tokio::test]
async fn success_attaches_exactly_one_source() {
    let enricher = Enricher::new(ScriptedGenerator::answering(LINEAR_ANSWER), "gemini-3-flash-preview");
    let started = Utc::now();

    let record = enricher.enrich("https://linear.app", "Linear").await.unwrap();

    assert_eq!(record.sources.len(), 1);
    assert_eq!(record.sources[0].url, "https://linear.app");
    assert!(record.sources[0].timestamp >= started);
    assert_eq!(record.what_they_do.as_ref().map(Vec::len), Some(3));
    assert!(!record.is_degraded());
}

#[tokio::test]
async fn request_carries_model_prompt_and_capabilities() {
    let enricher = Enricher::new(ScriptedGenerator::answering("{}"), "gemini-3-flash-preview");
    enricher.enrich("https://ramp.com", "Ramp").await.unwrap();

    let request = enricher
        .generator()
        .last_request
        .lock()
        .unwrap()
        .clone()
        .unwrap();
    assert_eq!(request.model, "gemini-3-flash-preview");
    assert!(request.url_context);
    assert_eq!(request.response_mime_type.as_deref(), Some("application/json"));
    assert!(request.prompt.contains("\"Ramp\" at https://ramp.com"));
}

#[tokio::test]
async fn blank_url_never_calls_generator() {
    let enricher = Enricher::new(ScriptedGenerator::answering(LINEAR_ANSWER), "m");

    for url in ["", "   "] {
        let err = enricher.enrich(url, "Linear").await.unwrap_err();
        assert!(matches!(err, EnrichError::Validation(ref m) if m == URL_REQUIRED));
        assert_eq!(err.status_code(), 400);
    }
    let err = enricher
        .enrich_request(&EnrichRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "URL is required");
    assert_eq!(enricher.generator().calls(), 0);
}

#[tokio::test]
async fn non_json_answer_still_returns_sources() {
    let enricher = Enricher::new(
        ScriptedGenerator::answering("Sorry, I was unable to browse that page."),
        "m",
    );
    let record = enricher.enrich("https://supabase.com", "Supabase").await.unwrap();

    assert!(record.is_degraded());
    assert_eq!(record.sources.len(), 1);
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json.as_object().unwrap().keys().collect::<Vec<_>>(), vec!["sources"]);
}

#[tokio::test]
async fn upstream_failure_propagates_once() {
    let enricher = Enricher::new(ScriptedGenerator::failing(503, "model overloaded"), "m");
    let err = enricher.enrich("https://linear.app", "Linear").await.unwrap_err();

    assert!(matches!(err, EnrichError::Api { status: 503, .. }));
    assert_eq!(err.status_code(), 500);
    assert_eq!(enricher.generator().calls(), 1);
}

#[tokio::test]
async fn missing_company_name_is_tolerated() {
    let enricher = Enricher::new(ScriptedGenerator::answering("{}"), "m");
    let record = enricher
        .enrich_request(&EnrichRequest {
            url: Some("https://linear.app".into()),
            company_name: None,
        })
        .await
        .unwrap();
    assert_eq!(record.sources[0].url, "https://linear.app");
}
