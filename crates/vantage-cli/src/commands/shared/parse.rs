use serde::de::DeserializeOwned;
use vantage_core::entities::StageFilter;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// `all` in any case means no stage constraint; anything else must name a stage.
pub fn parse_stage_filter(raw: &str) -> anyhow::Result<StageFilter> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("all") {
        return Ok(StageFilter::All);
    }
    StageFilter::try_from(trimmed.to_string())
        .map_err(|error| anyhow::anyhow!("invalid stage '{raw}': {error}"))
}
