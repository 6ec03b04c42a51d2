use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("FSM error: {0}")]
    Fsm(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn fsm(msg: impl Into<String>) -> Self {
        Self::Fsm(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::config("missing predictor url").to_string(),
            "Configuration error: missing predictor url"
        );
        assert_eq!(
            Error::InvalidTransition {
                current: "Submitting".to_string(),
                requested: "Submit".to_string(),
            }
            .to_string(),
            "Invalid state transition: Submitting -> Submit"
        );
    }

    #[test]
    fn test_yaml_error_conversion() {
        let err: Error = serde_yaml::from_str::<u16>("not a number").unwrap_err().into();
        assert!(err.to_string().starts_with("YAML error:"));
    }
}
