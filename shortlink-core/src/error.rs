use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShortlinkError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("No text in message")]
    NoText,

    #[error("State error: {0}")]
    State(String),
}

pub type Result<T> = std::result::Result<T, ShortlinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_error_converts_to_shortlink_error() {
        let e: ShortlinkError = HandlerError::NoText.into();
        assert!(matches!(e, ShortlinkError::Handler(HandlerError::NoText)));
    }

    #[test]
    fn config_error_display() {
        let e = ShortlinkError::Config("BOT_TOKEN not set".to_string());
        assert_eq!(e.to_string(), "Config error: BOT_TOKEN not set");
    }
}
