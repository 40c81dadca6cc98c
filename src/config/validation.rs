use super::models::Config;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("youtube.embed_base must be an absolute http(s) URL, got '{0}'")]
    InvalidEmbedBase(String),

    #[error("pdf.fallback_text must not be empty")]
    EmptyFallbackText,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_embed_base(config)?;
    validate_fallback_text(config)?;
    Ok(())
}

/// The embed base ends up as an iframe `src`; anything that is not an
/// absolute http(s) URL would produce markup pointing nowhere.
fn validate_embed_base(config: &Config) -> Result<(), ValidationError> {
    let base = &config.youtube.embed_base;

    let parsed = Url::parse(base)
        .map_err(|_| ValidationError::InvalidEmbedBase(base.clone()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::InvalidEmbedBase(base.clone())),
    }
}

fn validate_fallback_text(config: &Config) -> Result<(), ValidationError> {
    if config.pdf.fallback_text.trim().is_empty() {
        return Err(ValidationError::EmptyFallbackText);
    }
    Ok(())
}
