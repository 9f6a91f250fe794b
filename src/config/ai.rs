//! Endpoint constants for the hosted generative model.

/// Base URL for the Gemini generateContent call; the model name is appended.
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used for tokenomics generation.
pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Environment variable holding the API credential on native builds.
pub const GEMINI_ENV_KEY: &str = "GEMINI_API_KEY";
