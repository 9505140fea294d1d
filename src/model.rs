use serde::{Deserialize, Serialize};

/// Field elements committed for a state digest. Fixed by the protocol for
/// now; might become dynamic later.
pub const STATE_WIDTH: usize = 4;
/// Field elements committed for a transaction hash. Same story.
pub const TX_HASH_WIDTH: usize = 4;

/// On-disk proof artifact produced by the Noir prover: the raw proof bytes
/// plus the public inputs it commits to, as field-element strings.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProofData {
    pub proof: Vec<u8>,
    pub public_inputs: Vec<String>,
}

/// The state transition a verified proof attests to, decoded from the leading
/// public inputs. Built once per verification and emitted as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HyleOutput {
    pub version: u32,
    pub initial_state: Vec<u8>,
    pub next_state: Vec<u8>,
    pub origin: String,
    pub caller: String,
    pub block_number: u32,
    pub block_time: u32,
    pub tx_hash: Vec<u8>,
}

impl HyleOutput {
    /// Re-encodes the record into the public-input layout the contract side
    /// commits: decimal integers, hex bytes for arrays, and length-prefixed
    /// hex char codes for strings.
    pub fn to_fields(&self) -> Vec<String> {
        let mut fields = Vec::new();
        fields.push(self.version.to_string());
        fields.extend(self.initial_state.iter().map(|b| format!("{b:x}")));
        fields.extend(self.next_state.iter().map(|b| format!("{b:x}")));
        push_string_fields(&mut fields, &self.origin);
        push_string_fields(&mut fields, &self.caller);
        fields.push(self.block_number.to_string());
        fields.push(self.block_time.to_string());
        fields.extend(self.tx_hash.iter().map(|b| format!("{b:x}")));
        fields
    }
}

fn push_string_fields(fields: &mut Vec<String>, s: &str) {
    fields.push(s.chars().count().to_string());
    fields.extend(s.chars().map(|c| format!("{:x}", c as u32)));
}
