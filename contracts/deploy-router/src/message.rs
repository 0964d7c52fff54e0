use alloy_primitives::FixedBytes;
use alloy_sol_types::{sol, SolValue};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{ensure, HexBinary};

// Wire format of a remote-deployment request. `abi_encode_params` encodes the
// struct fields as ABI params, i.e.
// `abi.encode([bytes32, bytes32, bytes32, bytes, bytes], [...])`: three fixed
// head slots followed by two length-prefixed tails.
sol! {
    struct Deployment {
        bytes32 sender;
        bytes32 ism;
        bytes32 salt;
        bytes bytecode;
        bytes initCode;
    }
}

/// Byte offset of the `ism` head slot within an encoded request.
const ISM_OFFSET: usize = 32;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("insufficient message length")]
    InsufficientMessageLength,
    #[error(transparent)]
    AbiDecodeFailed(#[from] alloy_sol_types::Error),
}

/// A remote-deployment request as carried across chains. Constructed at
/// dispatch time, consumed at handle time, never persisted.
#[cw_serde]
pub struct DeploymentRequest {
    /// Origin account that requested the deployment, left-padded to 32 bytes.
    pub sender: [u8; 32],
    /// Security module the destination should verify with; all-zero delegates
    /// to the destination's default.
    pub ism: [u8; 32],
    /// Caller-chosen salt, used only for address derivation.
    pub salt: [u8; 32],
    pub bytecode: HexBinary,
    /// Executed against the deployed contract after creation; empty skips
    /// initialization.
    pub init_code: HexBinary,
}

impl DeploymentRequest {
    pub fn abi_encode(self) -> HexBinary {
        Deployment {
            sender: FixedBytes::<32>::new(self.sender),
            ism: FixedBytes::<32>::new(self.ism),
            salt: FixedBytes::<32>::new(self.salt),
            bytecode: Vec::<u8>::from(self.bytecode).into(),
            initCode: Vec::<u8>::from(self.init_code).into(),
        }
        .abi_encode_params()
        .into()
    }

    pub fn abi_decode(payload: &[u8]) -> Result<Self, Error> {
        let decoded = Deployment::abi_decode_params(payload, true)?;

        Ok(DeploymentRequest {
            sender: decoded.sender.0,
            ism: decoded.ism.0,
            salt: decoded.salt.0,
            bytecode: decoded.bytecode.to_vec().into(),
            init_code: decoded.initCode.to_vec().into(),
        })
    }

    /// Reads the `ism` field straight from its head slot, for callers that
    /// resolve the security module before a full decode. Must agree with
    /// [`Self::abi_decode`] on every validly encoded payload.
    pub fn ism(payload: &[u8]) -> Result<[u8; 32], Error> {
        ensure!(
            payload.len() >= ISM_OFFSET.saturating_add(32),
            Error::InsufficientMessageLength
        );

        let mut ism = [0u8; 32];
        ism.copy_from_slice(&payload[ISM_OFFSET..ISM_OFFSET.saturating_add(32)]);
        Ok(ism)
    }
}

#[cfg(test)]
mod tests {
    use assert_ok::assert_ok;

    use super::*;

    fn request(bytecode: &[u8], init_code: &[u8]) -> DeploymentRequest {
        DeploymentRequest {
            sender: [0x11; 32],
            ism: [0x22; 32],
            salt: [0x33; 32],
            bytecode: bytecode.to_vec().into(),
            init_code: init_code.to_vec().into(),
        }
    }

    #[test]
    fn encode_decode_round_trip() {
        let cases = [
            request(b"bytecode", b"init"),
            request(b"bytecode", b""),
            request(b"", b"init"),
            request(b"", b""),
            request(&[0xff; 100], &[0x01; 33]),
        ];

        for original in cases {
            let encoded = original.clone().abi_encode();
            let decoded = assert_ok!(DeploymentRequest::abi_decode(encoded.as_slice()));
            assert_eq!(original, decoded);
        }
    }

    #[test]
    fn encoding_matches_known_layout() {
        let encoded = request(b"abc", b"xy").abi_encode();

        let mut expected = Vec::new();
        expected.extend_from_slice(&[0x11; 32]); // sender
        expected.extend_from_slice(&[0x22; 32]); // ism
        expected.extend_from_slice(&[0x33; 32]); // salt
        expected.extend_from_slice(&abi_word(160)); // offset of bytecode tail
        expected.extend_from_slice(&abi_word(224)); // offset of init code tail
        expected.extend_from_slice(&abi_word(3)); // bytecode length
        expected.extend_from_slice(&right_padded(b"abc"));
        expected.extend_from_slice(&abi_word(2)); // init code length
        expected.extend_from_slice(&right_padded(b"xy"));

        assert_eq!(encoded.as_slice(), expected.as_slice());
    }

    #[test]
    fn ism_accessor_agrees_with_decoder() {
        let cases = [
            request(b"bytecode", b"init"),
            request(b"", b""),
            DeploymentRequest {
                sender: [0; 32],
                ism: [0; 32],
                salt: [0xab; 32],
                bytecode: vec![1, 2, 3].into(),
                init_code: vec![].into(),
            },
        ];

        for original in cases {
            let encoded = original.abi_encode();
            let decoded = assert_ok!(DeploymentRequest::abi_decode(encoded.as_slice()));
            let ism = assert_ok!(DeploymentRequest::ism(encoded.as_slice()));
            assert_eq!(ism, decoded.ism);
        }
    }

    #[test]
    fn ism_accessor_rejects_short_payload() {
        let res = DeploymentRequest::ism(&[0u8; 63]);
        assert!(matches!(res, Err(Error::InsufficientMessageLength)));
    }

    #[test]
    #[allow(clippy::arithmetic_side_effects)]
    fn decode_rejects_truncated_payload() {
        let encoded = request(b"bytecode", b"init").abi_encode();
        let truncated = &encoded.as_slice()[..encoded.len() - 8];

        assert!(matches!(
            DeploymentRequest::abi_decode(truncated),
            Err(Error::AbiDecodeFailed(_))
        ));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(DeploymentRequest::abi_decode(b"not an abi tuple").is_err());
        assert!(DeploymentRequest::abi_decode(&[]).is_err());
    }

    #[test]
    fn decode_rejects_inconsistent_length_prefix() {
        let mut encoded = request(b"abc", b"").abi_encode().to_vec();
        // claim the bytecode tail is longer than the payload it sits in
        encoded[160..192].copy_from_slice(&abi_word(1000));

        assert!(DeploymentRequest::abi_decode(&encoded).is_err());
    }

    fn abi_word(value: u64) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&value.to_be_bytes());
        word
    }

    fn right_padded(data: &[u8]) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[..data.len()].copy_from_slice(data);
        word
    }
}
