//! Known-answer vectors for encoding, hashing and identifier derivation.

use codechain_types::{
    Address, AssetAddress, AssetMintTransaction, AssetSchemeAddress, Hash, PaymentTransaction,
    Transaction, U256,
};

const MINT_HASH: &str = "0x141390e5cf213143e0f7edf35eeb52edcb6511a7873c5a529b4bf596688af05d";
const MINT_SCHEME_ADDRESS: &str = "0x5300000000000000e28e17b77adfdb14b469217d25bede9269af27a079d4476b";
const MINT_ASSET_ADDRESS: &str = "0x41000000000000007f2f85f876d2a9c2e375827c879ef7cc1f3b1464ccecdbde";
const PAYMENT_HASH: &str = "0xeee02ed4a33a3be0dcf53a0f0d1dff1d202bc4bba82e2a4735f8caa054dd8593";

fn mint(amount: Option<U256>) -> Transaction {
    AssetMintTransaction::new("", Hash::ZERO, vec![], amount).into()
}

/// `list_header ‖ 03 80 a0 ‖ zero lock hash ‖ tail`
fn mint_bytes(list_header: &str, tail: &str) -> Vec<u8> {
    hex::decode(format!("{}0380a0{}{}", list_header, "00".repeat(32), tail)).unwrap()
}

#[test]
fn asset_mint_fixture() {
    let tx = mint(Some(U256::from(111u64)));

    assert_eq!(tx.rlp_bytes(), mint_bytes("e8", "c0c16fc080"));
    assert_eq!(tx.hash().to_string(), MINT_HASH);

    let Transaction::AssetMint(inner) = &tx else {
        panic!("expected an asset mint");
    };
    assert_eq!(inner.asset_scheme_address().to_string(), MINT_SCHEME_ADDRESS);
    assert_eq!(inner.asset_address().to_string(), MINT_ASSET_ADDRESS);
    assert_eq!(
        AssetSchemeAddress::new(&tx.hash()).to_string(),
        MINT_SCHEME_ADDRESS
    );
    assert_eq!(AssetAddress::new(&tx.hash(), 0).to_string(), MINT_ASSET_ADDRESS);

    let asset = inner.minted_asset().unwrap();
    assert_eq!(asset.asset_type().to_string(), MINT_SCHEME_ADDRESS);
    assert_eq!(asset.amount(), &U256::from(111u64));
}

#[test]
fn asset_mint_amount_variants() {
    let zero = mint(Some(U256::ZERO));
    assert_eq!(zero.rlp_bytes(), mint_bytes("e8", "c0c180c080"));
    assert_eq!(
        zero.hash().to_string(),
        "0x53993e8d1632ba251c04262ab330e5850c77450abd001457a974541f8376fbbb"
    );

    let unlimited = mint(None);
    assert_eq!(unlimited.rlp_bytes(), mint_bytes("e7", "c0c0c080"));
    assert_eq!(
        unlimited.hash().to_string(),
        "0x5f43beb22a1cf8cad9745dd305e69934367ae02d88e9462fc7968f7687ab200b"
    );
}

#[test]
fn payment_fixture() {
    let tx: Transaction = PaymentTransaction::new(
        U256::ZERO,
        Address::from_bytes([0x01; 20]),
        Address::from_bytes([0x02; 20]),
        U256::from(1000u64),
    )
    .into();

    let expected = hex::decode(format!(
        "ef0180{}{}8203e8",
        format!("94{}", "01".repeat(20)),
        format!("94{}", "02".repeat(20))
    ))
    .unwrap();
    assert_eq!(expected.len(), 48);
    assert_eq!(tx.rlp_bytes(), expected);
    assert_eq!(tx.hash().to_string(), PAYMENT_HASH);
    assert_eq!(Transaction::decode_rlp(&expected).unwrap(), tx);
}

#[test]
fn node_reported_identifiers_round_trip() {
    let scheme: Hash = MINT_SCHEME_ADDRESS.parse().unwrap();
    assert!(AssetSchemeAddress::from_hash(scheme).is_ok());
    assert!(AssetAddress::from_hash(scheme).is_err());

    let tx_hash: Hash = MINT_HASH.parse().unwrap();
    assert!(AssetSchemeAddress::from_hash(tx_hash).is_err());
}

#[test]
fn fixture_json_round_trip() {
    let tx = mint(Some(U256::from(111u64)));
    let value = tx.to_json().unwrap();
    assert_eq!(value["assetMint"]["amount"], "0x6f");
    assert_eq!(value["assetMint"]["registrar"], serde_json::Value::Null);

    let decoded = Transaction::from_json(&value).unwrap();
    assert_eq!(decoded.hash().to_string(), MINT_HASH);
}
