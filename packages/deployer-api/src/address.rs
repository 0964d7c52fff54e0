use cosmwasm_std::{Addr, Api, StdResult};

/// Domain separator for derived account ids, mirroring the CREATE2 scheme.
const DERIVATION_PREFIX: u8 = 0xff;

/// Derives the creation salt from the requesting account and its chosen salt.
///
/// Hashing the sender in keeps two accounts that pick the same literal salt
/// from colliding on one deployment address, while the same (sender, salt)
/// pair always reproduces the same target.
pub fn deployment_salt(sender: &[u8; 32], salt: &[u8; 32]) -> [u8; 32] {
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(sender);
    preimage[32..].copy_from_slice(salt);
    alloy_primitives::keccak256(preimage).0
}

/// The address the deployer will create a contract at for the given bytecode
/// and salt. Pure in (deployer, bytecode, salt); router and deployer must
/// agree on this function.
pub fn deployment_address(
    api: &dyn Api,
    deployer: &Addr,
    bytecode: &[u8],
    salt: &[u8; 32],
) -> StdResult<Addr> {
    let deployer = api.addr_canonicalize(deployer.as_str())?;
    let bytecode_hash = alloy_primitives::keccak256(bytecode);

    let mut preimage = Vec::with_capacity(1 + deployer.len() + salt.len() + 32);
    preimage.push(DERIVATION_PREFIX);
    preimage.extend_from_slice(deployer.as_slice());
    preimage.extend_from_slice(salt);
    preimage.extend_from_slice(bytecode_hash.as_slice());

    let raw = alloy_primitives::keccak256(preimage);
    api.addr_humanize(&raw.to_vec().into())
}
