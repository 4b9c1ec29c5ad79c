use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("Erro na requisição: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Não foi possível buscar o Pokémon (status: {status}): {reason}")]
    UnsuccessfulResponse { status: u16, reason: String },

    #[error("JSON inválido: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Nenhum JSON foi fornecido")]
    MissingInput,

    #[error("Campo obrigatório ausente: {path}")]
    MissingField { path: String },

    #[error("Lista vazia, índice 0 fora dos limites: {path}")]
    EmptyCollection { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuração inválida em '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Valor inválido para '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Payload-free discriminant of [`PokedexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    UnsuccessfulResponse,
    Parse,
    MissingInput,
    MissingField,
    EmptyCollection,
    Io,
    Config,
}

impl PokedexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PokedexError::TransportError(_) => ErrorKind::Transport,
            PokedexError::UnsuccessfulResponse { .. } => ErrorKind::UnsuccessfulResponse,
            PokedexError::ParseError(_) => ErrorKind::Parse,
            PokedexError::MissingInput => ErrorKind::MissingInput,
            PokedexError::MissingField { .. } => ErrorKind::MissingField,
            PokedexError::EmptyCollection { .. } => ErrorKind::EmptyCollection,
            PokedexError::IoError(_) => ErrorKind::Io,
            PokedexError::ConfigValidationError { .. }
            | PokedexError::InvalidConfigValueError { .. } => ErrorKind::Config,
        }
    }

    /// Field path carried by extraction failures.
    pub fn field_path(&self) -> Option<&str> {
        match self {
            PokedexError::MissingField { path } | PokedexError::EmptyCollection { path } => {
                Some(path)
            }
            _ => None,
        }
    }

    pub(crate) fn missing(path: impl Into<String>) -> Self {
        PokedexError::MissingField { path: path.into() }
    }

    pub(crate) fn empty(path: impl Into<String>) -> Self {
        PokedexError::EmptyCollection { path: path.into() }
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
