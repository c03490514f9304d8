use thiserror::Error;

/// Every way a proofread/translate request can fail. Nothing here is retried;
/// re-running is up to the caller.
#[derive(Debug, Error, PartialEq)]
pub enum Failure {
    #[error(
        "OpenRouter API key is missing. Set api_key in config.toml or the OPENROUTER_API_KEY environment variable."
    )]
    MissingCredential,

    #[error("unknown task type: {0}")]
    UnknownTaskType(String),

    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("no system prompt configured for {0}")]
    EmptyUpstreamPrompt(String),

    #[error("source text is empty")]
    EmptySourceText,

    #[error("{0} does not accept a modifier")]
    ModifierRejected(String),

    #[error("OpenRouter API error: {status} - {body}")]
    Transport { status: u16, body: String },

    #[error("request to OpenRouter failed: {0}")]
    Connection(String),

    #[error("malformed response from OpenRouter: {0}")]
    MalformedUpstreamPayload(String),
}

pub type Result<T, E = Failure> = std::result::Result<T, E>;
