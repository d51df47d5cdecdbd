//! CLI-level failures and their exit codes.

use thiserror::Error;
use x_post::XPostError;
use xai_client::XaiError;

/// Runtime failure (platform, network, partial thread, missing `--confirm`).
pub const EXIT_FAILURE: u8 = 1;

/// Configuration or usage error. Nothing was sent.
pub const EXIT_USAGE: u8 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad input: missing files, out-of-range picks, blank topics
    #[error("{0}")]
    Usage(String),

    /// Real posting was requested without `--confirm`
    #[error("Add --confirm to actually post. Use --dry-run to preview.")]
    NotConfirmed,
}

/// Map an error chain to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(e) = err.downcast_ref::<CliError>() {
        return match e {
            CliError::Usage(_) => EXIT_USAGE,
            CliError::NotConfirmed => EXIT_FAILURE,
        };
    }

    match err.downcast_ref::<XPostError>() {
        Some(XPostError::MissingCredentials { .. }) | Some(XPostError::Config(_)) => {
            return EXIT_USAGE
        }
        Some(_) => return EXIT_FAILURE,
        None => {}
    }

    match err.downcast_ref::<XaiError>() {
        Some(XaiError::Config(_)) => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let usage = anyhow::Error::new(CliError::Usage("bad pick".into()));
        assert_eq!(exit_code(&usage), EXIT_USAGE);

        let unconfirmed = anyhow::Error::new(CliError::NotConfirmed);
        assert_eq!(exit_code(&unconfirmed), EXIT_FAILURE);

        let creds = anyhow::Error::new(XPostError::MissingCredentials {
            missing: vec!["X_API_KEY"],
        });
        assert_eq!(exit_code(&creds), EXIT_USAGE);

        let platform = anyhow::Error::new(XPostError::Platform {
            status: 403,
            body: String::new(),
        });
        assert_eq!(exit_code(&platform), EXIT_FAILURE);

        let xai_key = anyhow::Error::new(XaiError::Config("XAI_API_KEY is not set".into()));
        assert_eq!(exit_code(&xai_key), EXIT_USAGE);

        let io = anyhow::anyhow!("disk full");
        assert_eq!(exit_code(&io), EXIT_FAILURE);
    }
}
