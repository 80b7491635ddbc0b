use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown planet: '{name}'")]
    UnknownPlanet { name: String },

    #[error("Game is over: no more shots accepted")]
    GameOver,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),
}

impl GameError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        GameError::InvalidInput(reason.into())
    }

    /// Errors caused by what the player typed, as opposed to setup problems.
    pub fn is_user_error(&self) -> bool {
        matches!(self, GameError::InvalidInput(_) | GameError::GameOver)
    }
}
