use tracing::debug;

use crate::error::VerifierError;
use crate::model::{HyleOutput, STATE_WIDTH, TX_HASH_WIDTH};

/// Cursor over the public-input field elements. Every decoding step advances
/// the same cursor left to right; nothing is ever re-read or skipped back to.
pub struct FieldCursor<'a> {
    fields: &'a [String],
    pos: usize,
}

impl<'a> FieldCursor<'a> {
    pub fn new(fields: &'a [String]) -> Self {
        FieldCursor { fields, pos: 0 }
    }

    /// Number of field elements consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    fn next(&mut self, what: &str) -> Result<&'a str, VerifierError> {
        let field = self.fields.get(self.pos).ok_or_else(|| {
            VerifierError::PublicInput(format!(
                "missing field element for {what} (ran out after {})",
                self.pos
            ))
        })?;
        self.pos += 1;
        Ok(field)
    }

    /// One field element, base 10.
    pub fn pop_uint(&mut self, what: &str) -> Result<u32, VerifierError> {
        let field = self.next(what)?;
        field.parse::<u32>().map_err(|e| {
            VerifierError::PublicInput(format!("invalid decimal for {what}: {field:?} ({e})"))
        })
    }

    fn pop_hex_byte(&mut self, what: &str) -> Result<u8, VerifierError> {
        let field = self.next(what)?;
        // u8 parsing also rejects values above 0xff rather than truncating.
        u8::from_str_radix(field, 16).map_err(|e| {
            VerifierError::PublicInput(format!("invalid hex byte for {what}: {field:?} ({e})"))
        })
    }

    /// `n` field elements, one hex byte each.
    pub fn pop_bytes(&mut self, n: usize, what: &str) -> Result<Vec<u8>, VerifierError> {
        let mut resp = Vec::with_capacity(n);
        for _ in 0..n {
            resp.push(self.pop_hex_byte(what)?);
        }
        debug!("Parsed {}: {:?}", what, resp);
        Ok(resp)
    }

    /// Length-prefixed string: one decimal length element, then that many
    /// elements each holding one character code as a hex byte.
    pub fn pop_string(&mut self, what: &str) -> Result<String, VerifierError> {
        let length = self.pop_uint(what)? as usize;
        let mut resp = String::with_capacity(length);
        for _ in 0..length {
            resp.push(char::from(self.pop_hex_byte(what)?));
        }
        debug!("Parsed {}: {}", what, resp);
        Ok(resp)
    }
}

/// Decodes the fixed prefix of the public inputs into a [`HyleOutput`].
///
/// Field elements left over after the transaction hash are program-specific
/// outputs; they are not part of the protocol schema and stay untouched.
pub fn parse_public_inputs(fields: &[String]) -> Result<HyleOutput, VerifierError> {
    let mut cursor = FieldCursor::new(fields);

    let version = cursor.pop_uint("version")?;
    debug!("Parsed version: {}", version);
    let initial_state = cursor.pop_bytes(STATE_WIDTH, "initial_state")?;
    let next_state = cursor.pop_bytes(STATE_WIDTH, "next_state")?;
    let origin = cursor.pop_string("origin")?;
    let caller = cursor.pop_string("caller")?;
    let block_number = cursor.pop_uint("block_number")?;
    let block_time = cursor.pop_uint("block_time")?;
    let tx_hash = cursor.pop_bytes(TX_HASH_WIDTH, "tx_hash")?;

    Ok(HyleOutput {
        version,
        initial_state,
        next_state,
        origin,
        caller,
        block_number,
        block_time,
        tx_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn reference_fields() -> Vec<String> {
        // version 1, two zeroed state digests, origin "Hil", caller "42",
        // block 100 at time 1000, zeroed tx hash.
        fields(&[
            "1", "0", "0", "0", "0", "0", "0", "0", "0", "3", "48", "69", "6c", "2", "34", "32",
            "100", "1000", "0", "0", "0", "0",
        ])
    }

    fn reference_output() -> HyleOutput {
        HyleOutput {
            version: 1,
            initial_state: vec![0, 0, 0, 0],
            next_state: vec![0, 0, 0, 0],
            origin: "Hil".to_string(),
            caller: "42".to_string(),
            block_number: 100,
            block_time: 1000,
            tx_hash: vec![0, 0, 0, 0],
        }
    }

    #[test_log::test]
    fn test_parse_public_inputs() {
        let output = parse_public_inputs(&reference_fields()).unwrap();
        assert_eq!(output, reference_output());
    }

    #[test_log::test]
    fn test_trailing_fields_are_ignored() {
        let mut with_outputs = reference_fields();
        with_outputs.extend(fields(&["2a", "ff", "not even a number", ""]));
        let output = parse_public_inputs(&with_outputs).unwrap();
        assert_eq!(output, reference_output());
    }

    #[test_log::test]
    fn test_consumes_exact_prefix() {
        let input = reference_fields();
        let mut cursor = FieldCursor::new(&input);
        cursor.pop_uint("version").unwrap();
        cursor.pop_bytes(STATE_WIDTH, "initial_state").unwrap();
        cursor.pop_bytes(STATE_WIDTH, "next_state").unwrap();
        cursor.pop_string("origin").unwrap();
        cursor.pop_string("caller").unwrap();
        cursor.pop_uint("block_number").unwrap();
        cursor.pop_uint("block_time").unwrap();
        cursor.pop_bytes(TX_HASH_WIDTH, "tx_hash").unwrap();
        // 17 fixed schema elements + 3 origin chars + 2 caller chars
        assert_eq!(cursor.consumed(), 22);
    }

    #[test_log::test]
    fn test_round_trip() {
        let output = HyleOutput {
            version: 1,
            initial_state: vec![0, 0, 0, 1],
            next_state: vec![0, 0, 0, 2],
            origin: "hydentity".to_string(),
            caller: "alice.hydentity".to_string(),
            block_number: 4527,
            block_time: 1735689600,
            tx_hash: vec![0xde, 0xad, 0xbe, 0xef],
        };
        assert_eq!(parse_public_inputs(&output.to_fields()).unwrap(), output);
    }

    #[test_log::test]
    fn test_empty_string_consumes_only_its_length() {
        let input = fields(&["0", "7"]);
        let mut cursor = FieldCursor::new(&input);
        assert_eq!(cursor.pop_string("origin").unwrap(), "");
        assert_eq!(cursor.consumed(), 1);
    }

    #[test_log::test]
    fn test_truncated_input_is_an_error() {
        let full = reference_fields();
        for len in 0..full.len() {
            let err = parse_public_inputs(&full[..len]).unwrap_err();
            assert!(
                matches!(err, VerifierError::PublicInput(_)),
                "truncation at {len} gave {err:?}"
            );
        }
    }

    #[test_log::test]
    fn test_string_shorter_than_its_length_prefix() {
        let input = fields(&["5", "48", "69"]);
        let mut cursor = FieldCursor::new(&input);
        assert!(cursor.pop_string("origin").is_err());
    }

    #[test_log::test]
    fn test_rejects_out_of_range_byte() {
        // 0x100 does not fit a byte, and is rejected rather than truncated.
        let input = fields(&["100", "0"]);
        let mut cursor = FieldCursor::new(&input);
        assert!(cursor.pop_bytes(2, "initial_state").is_err());
    }

    #[test_log::test]
    fn test_rejects_non_decimal_uint() {
        let input = fields(&["ff"]);
        let mut cursor = FieldCursor::new(&input);
        assert!(cursor.pop_uint("version").is_err());
    }
}
