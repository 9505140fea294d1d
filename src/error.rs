use std::fmt;

/// Everything that can go wrong between reading the input files and printing
/// the decoded output. Each kind maps to a stable exit code so callers can
/// tell a broken input apart from an invalid proof (which is reported with
/// exit code 1 and is not an error).
#[derive(Debug)]
pub enum VerifierError {
    /// Proof or verification-key file missing or unreadable.
    Io(std::io::Error),
    /// Proof artifact is not the expected JSON document.
    ProofFormat(serde_json::Error),
    /// Verification key is not valid base64.
    VKeyFormat(base64::DecodeError),
    /// Public inputs do not follow the Hyle output layout. Only reachable
    /// after a successful verification, so it means the prover and this
    /// decoder disagree on the schema.
    PublicInput(String),
    /// The proving backend could not be run at all.
    Backend(anyhow::Error),
}

impl VerifierError {
    pub fn exit_code(&self) -> u8 {
        match self {
            VerifierError::Io(_) => 2,
            VerifierError::ProofFormat(_) | VerifierError::VKeyFormat(_) => 3,
            VerifierError::PublicInput(_) => 4,
            VerifierError::Backend(_) => 5,
        }
    }
}

impl fmt::Display for VerifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifierError::Io(e) => write!(f, "reading input file: {e}"),
            VerifierError::ProofFormat(e) => write!(f, "malformed proof file: {e}"),
            VerifierError::VKeyFormat(e) => write!(f, "malformed verification key: {e}"),
            VerifierError::PublicInput(msg) => write!(f, "malformed public inputs: {msg}"),
            VerifierError::Backend(e) => write!(f, "proving backend failure: {e:#}"),
        }
    }
}

impl std::error::Error for VerifierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VerifierError::Io(e) => Some(e),
            VerifierError::ProofFormat(e) => Some(e),
            VerifierError::VKeyFormat(e) => Some(e),
            VerifierError::PublicInput(_) => None,
            VerifierError::Backend(e) => Some(e.as_ref()),
        }
    }
}

impl From<std::io::Error> for VerifierError {
    fn from(e: std::io::Error) -> Self {
        VerifierError::Io(e)
    }
}

impl From<serde_json::Error> for VerifierError {
    fn from(e: serde_json::Error) -> Self {
        VerifierError::ProofFormat(e)
    }
}

impl From<base64::DecodeError> for VerifierError {
    fn from(e: base64::DecodeError) -> Self {
        VerifierError::VKeyFormat(e)
    }
}
