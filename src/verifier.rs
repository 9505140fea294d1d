use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;
use rand::Rng;
use tracing::debug;

use crate::error::VerifierError;

/// Checks a proof against a verification key. The cryptographic work is
/// delegated to an external backend; this seam only reports validity.
pub trait ProofVerifier {
    fn verify(
        &self,
        proof: &[u8],
        public_inputs: &[String],
        vkey: &[u8],
    ) -> Result<bool, VerifierError>;
}

/// Proof verification through the Barretenberg `bb` CLI.
///
/// At present, we are using binary to facilitate the integration of the Noir
/// verifier. This is not meant to be a permanent solution.
pub struct BarretenbergCli {
    pub binary: String,
}

impl Default for BarretenbergCli {
    fn default() -> Self {
        BarretenbergCli {
            binary: "bb".to_string(),
        }
    }
}

struct TempFiles {
    proof_path: PathBuf,
    vk_path: PathBuf,
}

impl Drop for TempFiles {
    fn drop(&mut self) {
        if std::env::var("HYLE_KEEP_NOIR_TMP_FILES").unwrap_or_else(|_| "false".to_string())
            != "true"
        {
            let _ = std::fs::remove_file(&self.proof_path);
            let _ = std::fs::remove_file(&self.vk_path);
        }
    }
}

impl ProofVerifier for BarretenbergCli {
    // `bb` reads the public inputs from the proof blob itself.
    fn verify(
        &self,
        proof: &[u8],
        _public_inputs: &[String],
        vkey: &[u8],
    ) -> Result<bool, VerifierError> {
        self.run_backend(proof, vkey).map_err(VerifierError::Backend)
    }
}

impl BarretenbergCli {
    fn run_backend(&self, proof: &[u8], vkey: &[u8]) -> anyhow::Result<bool> {
        let mut rng = rand::rng();
        let salt: [u8; 16] = rng.random();
        let salt_hex = hex::encode(salt);

        // Temp files auto-clean on function exit.
        let tmp_dir = std::env::temp_dir();
        let temp_files = TempFiles {
            proof_path: tmp_dir.join(format!("noir-proof-{salt_hex}")),
            vk_path: tmp_dir.join(format!("noir-vk-{salt_hex}")),
        };

        std::fs::write(&temp_files.proof_path, proof)
            .context("Failed to write proof to temp file")?;
        std::fs::write(&temp_files.vk_path, vkey).context("Failed to write vkey to temp file")?;

        debug!(
            "Proof path: {} VK path: {}",
            temp_files.proof_path.display(),
            temp_files.vk_path.display()
        );

        let verification_output = Command::new(&self.binary)
            .arg("verify")
            .arg("-p")
            .arg(&temp_files.proof_path)
            .arg("-k")
            .arg(&temp_files.vk_path)
            .output()
            .with_context(|| format!("Failed to run `{}`", self.binary))?;

        // A non-zero status is a negative verdict, not a backend failure.
        if !verification_output.status.success() {
            debug!(
                "Noir proof verification failed: {}",
                String::from_utf8_lossy(&verification_output.stderr)
            );
            return Ok(false);
        }

        Ok(true)
    }
}
