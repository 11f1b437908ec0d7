use recipe_search_client::InvalidParameterError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("No API key configured. Set SPOONACULAR_API_KEY or api_key in the config file.")]
    MissingApiKey,
    #[error("Invalid configuration: {0}")]
    Config(Box<figment::Error>),
    #[error("{}", .0.user_message())]
    Client(#[from] recipe_search_client::Error),
    #[error("{0}")]
    InvalidInput(#[from] InvalidParameterError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        CliError::Config(Box::new(err))
    }
}
