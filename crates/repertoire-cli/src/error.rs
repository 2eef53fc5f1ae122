use anyhow::Error;
use repertoire_config::ConfigError;
use repertoire_core::CoreError;
use repertoire_store::error::{StoreError, StoreErrorKind};
use repertoire_store::service::ServiceError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;
pub const EXIT_AUTH_FAILED: u8 = 4;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Failed(String),
    #[error("authentication failed")]
    AuthFailed,
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn failed(message: impl Into<String>) -> Error {
    CliError::Failed(message.into()).into()
}

/// Store detail is only printed with `--verbose`; otherwise service failures
/// collapse to their user-facing notice.
pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
        return;
    }
    for cause in err.chain() {
        if let Some(service_err) = cause.downcast_ref::<ServiceError>() {
            eprintln!("error: {}", service_err.user_message());
            return;
        }
    }
    eprintln!("error: {}", err);
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotFound(_) => EXIT_NOT_FOUND,
                CliError::Failed(_) => EXIT_FAILURE,
                CliError::AuthFailed => EXIT_AUTH_FAILED,
            });
        }
        if let Some(service_err) = cause.downcast_ref::<ServiceError>() {
            return ExitCode::from(match service_err {
                ServiceError::Invalid(_) => EXIT_INVALID_INPUT,
                ServiceError::Unavailable(_) => EXIT_FAILURE,
            });
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::Precondition
        | StoreErrorKind::Core
        | StoreErrorKind::DuplicateAccount
        | StoreErrorKind::InvalidDataPath => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir
        | StoreErrorKind::Migration
        | StoreErrorKind::Sql
        | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidDatabasePath(_)
        | ConfigError::InvalidCompteId(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
