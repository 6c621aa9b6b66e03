/// Application-level errors
///
/// Upstream failures never reach the caller as HTTP errors; handlers convert
/// them into empty responses of the correct shape after logging.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

pub type AppResult<T> = Result<T, AppError>;
