use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeroError {
    #[error("Http failure during request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Http failure response for {url}: {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Hero with id={id} not found")]
    NotFound { id: i64 },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl HeroError {
    /// 給使用者看的錯誤訊息（寫入訊息紀錄）
    pub fn message(&self) -> String {
        self.to_string()
    }
}

pub type Result<T> = std::result::Result<T, HeroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_format() {
        let err = HeroError::Status {
            url: "http://localhost/api/heroes/99".to_string(),
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(
            err.message(),
            "Http failure response for http://localhost/api/heroes/99: 404 Not Found"
        );
    }

    #[test]
    fn test_invalid_config_value_message() {
        let err = HeroError::InvalidConfigValue {
            field: "api.base_url".to_string(),
            value: "nope".to_string(),
            reason: "URL cannot be empty".to_string(),
        };
        assert_eq!(
            err.message(),
            "Invalid value for api.base_url: 'nope' (URL cannot be empty)"
        );
    }
}
