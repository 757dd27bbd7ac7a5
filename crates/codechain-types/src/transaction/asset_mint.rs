use crate::address::Address;
use crate::asset::Asset;
use crate::asset_address::{AssetAddress, AssetSchemeAddress};
use crate::hash::Hash;
use crate::u256::U256;

/// Register a new asset scheme and mint its initial supply into output 0.
///
/// `amount == None` is an unlimited supply and is kept distinct from a
/// supply of zero in both the JSON and RLP forms.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct AssetMintTransaction {
    pub(crate) metadata: String,
    pub(crate) lock_script_hash: Hash,
    #[cfg_attr(feature = "serde", serde(with = "crate::serialization::serde_impls::hex_bytes_list"))]
    pub(crate) parameters: Vec<Vec<u8>>,
    #[cfg_attr(feature = "serde", serde(with = "crate::serialization::serde_impls::nullable"))]
    pub(crate) amount: Option<U256>,
    #[cfg_attr(feature = "serde", serde(with = "crate::serialization::serde_impls::nullable"))]
    pub(crate) registrar: Option<Address>,
    pub(crate) nonce: U256,
}

impl AssetMintTransaction {
    /// Create a mint with no registrar and nonce zero.
    pub fn new(
        metadata: impl Into<String>,
        lock_script_hash: Hash,
        parameters: Vec<Vec<u8>>,
        amount: Option<U256>,
    ) -> Self {
        Self {
            metadata: metadata.into(),
            lock_script_hash,
            parameters,
            amount,
            registrar: None,
            nonce: U256::ZERO,
        }
    }

    pub fn with_registrar(mut self, registrar: Address) -> Self {
        self.registrar = Some(registrar);
        self
    }

    pub fn with_nonce(mut self, nonce: U256) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    pub fn lock_script_hash(&self) -> &Hash {
        &self.lock_script_hash
    }

    pub fn parameters(&self) -> &[Vec<u8>] {
        &self.parameters
    }

    pub fn amount(&self) -> Option<&U256> {
        self.amount.as_ref()
    }

    pub fn registrar(&self) -> Option<&Address> {
        self.registrar.as_ref()
    }

    pub fn nonce(&self) -> &U256 {
        &self.nonce
    }

    /// BLAKE2b-256 of the RLP encoding
    pub fn hash(&self) -> Hash {
        Hash::blake256(&rlp::encode(self))
    }

    /// Address of the asset scheme this mint registers.
    pub fn asset_scheme_address(&self) -> AssetSchemeAddress {
        AssetSchemeAddress::new(&self.hash())
    }

    /// Address of the minted asset (output 0).
    pub fn asset_address(&self) -> AssetAddress {
        AssetAddress::new(&self.hash(), 0)
    }

    /// The asset this mint creates, or `None` for an unlimited supply.
    pub fn minted_asset(&self) -> Option<Asset> {
        self.amount.map(|amount| {
            Asset::new(
                self.asset_scheme_address().into_hash(),
                self.lock_script_hash,
                self.parameters.clone(),
                amount,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mint(amount: Option<U256>) -> AssetMintTransaction {
        AssetMintTransaction::new("", Hash::ZERO, vec![], amount)
    }

    #[test]
    fn test_defaults() {
        let tx = mint(Some(U256::from(111u64)));
        assert_eq!(tx.nonce(), &U256::ZERO);
        assert!(tx.registrar().is_none());
        assert_eq!(tx.amount(), Some(&U256::from(111u64)));
    }

    #[test]
    fn test_null_amount_differs_from_zero() {
        let unlimited = mint(None);
        let zero = mint(Some(U256::ZERO));
        assert_ne!(rlp::encode(&unlimited), rlp::encode(&zero));
        assert_ne!(unlimited.hash(), zero.hash());
        assert_ne!(unlimited.asset_scheme_address(), zero.asset_scheme_address());
    }

    #[test]
    fn test_identities_are_separated() {
        let tx = mint(Some(U256::from(111u64)));
        let hash = tx.hash();
        assert_ne!(tx.asset_scheme_address().into_hash(), hash);
        assert_ne!(tx.asset_address().into_hash(), hash);
        assert_ne!(tx.asset_address().into_hash(), tx.asset_scheme_address().into_hash());
    }

    #[test]
    fn test_minted_asset() {
        let tx = mint(Some(U256::from(111u64)));
        let asset = tx.minted_asset().unwrap();
        assert_eq!(asset.asset_type(), tx.asset_scheme_address().as_hash());
        assert_eq!(asset.amount(), &U256::from(111u64));
        assert!(mint(None).minted_asset().is_none());
    }

    #[test]
    fn test_registrar_and_nonce_change_hash() {
        let base = mint(Some(U256::from(1u64)));
        let with_registrar = base.clone().with_registrar(Address::from_bytes([9u8; 20]));
        let with_nonce = base.clone().with_nonce(U256::ONE);
        assert_ne!(base.hash(), with_registrar.hash());
        assert_ne!(base.hash(), with_nonce.hash());
    }
}
