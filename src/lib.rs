pub mod error;
pub mod model;
pub mod parser;
pub mod verifier;

pub use error::VerifierError;
pub use model::{HyleOutput, ProofData};

use verifier::ProofVerifier;

/// Verifies the proof, then decodes its public inputs.
///
/// Returns `Ok(None)` when the proof does not verify; decoding never runs in
/// that case. Everything else that goes wrong is a [`VerifierError`].
pub fn verify_and_parse(
    verifier: &impl ProofVerifier,
    proof: &ProofData,
    vkey: &[u8],
) -> Result<Option<HyleOutput>, VerifierError> {
    if !verifier.verify(&proof.proof, &proof.public_inputs, vkey)? {
        return Ok(None);
    }

    let output = parser::parse_public_inputs(&proof.public_inputs)?;
    tracing::info!("✅ Noir proof verified.");

    Ok(Some(output))
}
