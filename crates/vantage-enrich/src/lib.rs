//! # vantage-enrich
//!
//! Turns a company website into an [`EnrichmentRecord`] by asking a
//! generative model (Gemini, with URL context) for a summary, what the
//! company does, keywords and signals inferred from the page.
//!
//! - [`ContentGenerator`]: the model seam; [`GeminiClient`] is the real one.
//! - [`Enricher`]: validation, prompt, lenient parsing, source stamping.
//! - [`RemoteEnricher`]: the same operation through a running server.
//!
//! [`EnrichmentRecord`]: vantage_core::entities::EnrichmentRecord

pub mod gemini;
pub mod generator;
pub mod parse;
pub mod prompt;
pub mod remote;
pub mod service;

mod error;
mod http;

pub use error::EnrichError;
pub use gemini::GeminiClient;
pub use generator::{ContentGenerator, GenerateRequest};
pub use remote::RemoteEnricher;
pub use service::{EnrichRequest, Enricher, URL_REQUIRED};
