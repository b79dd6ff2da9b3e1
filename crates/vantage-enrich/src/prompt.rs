//! Prompt sent to the generative model.

/// MIME type requested for the model's answer.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Deterministic enrichment prompt for `company_name` at `url`.
#[must_use]
pub fn build_prompt(company_name: &str, url: &str) -> String {
    format!(
        "You are an expert VC analyst. Analyze the website content for the company \
\"{company_name}\" at {url}.
Provide a structured enrichment profile with the following fields:
1. summary: A concise 1-2 sentence overview of what the company does.
2. whatTheyDo: 3-6 bullet points detailing their product, value proposition, and target market.
3. keywords: 5-10 relevant industry or technology keywords.
4. derivedSignals: 2-4 signals inferred from the page (e.g. \"Careers page active\", \
\"Recent blog posts\", \"Changelog present\", \"Enterprise focus\", \"Open source\").

Respond with only a JSON object of the form
{{\"summary\": string, \"whatTheyDo\": [string], \"keywords\": [string], \"derivedSignals\": [string]}}
and no surrounding text or Markdown."
    )
}
