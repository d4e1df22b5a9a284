//! Decode-path tests for the keyset envelope and key payload messages.

use prost::Message;
use sealbox_proto::{
    decode_message, encode_message, EcCurveType, EcdhAeadParams, EcdhAeadPrivateKey,
    EcdhAeadPublicKey, EcdhKwParams, Key, KeyData, KeyMaterialType, KeyStatus, Keyset, KeysetInfo,
    ECDH_AEAD_PRIVATE_KEY_TYPE_URL,
};

fn sample_private_key_payload() -> EcdhAeadPrivateKey {
    EcdhAeadPrivateKey {
        version: 0,
        public_key: Some(EcdhAeadPublicKey {
            version: 0,
            params: Some(EcdhAeadParams {
                kw_params: Some(EcdhKwParams {
                    curve_type: EcCurveType::NistP256 as i32,
                }),
                enc_params: None,
                ec_point_format: 0,
            }),
            x: vec![0x01; 32],
            y: vec![0x02; 32],
        }),
        key_value: hex::decode("00112233445566778899aabbccddeeff").unwrap(),
    }
}

#[test]
fn test_keyset_with_nested_payload_decodes() {
    let payload = sample_private_key_payload();
    let keyset = Keyset {
        primary_key_id: 42,
        key: vec![Key {
            key_data: Some(KeyData {
                type_url: ECDH_AEAD_PRIVATE_KEY_TYPE_URL.to_string(),
                value: encode_message(&payload).unwrap(),
                key_material_type: KeyMaterialType::AsymmetricPrivate as i32,
            }),
            status: KeyStatus::Enabled as i32,
            key_id: 42,
        }],
    };

    let bytes = encode_message(&keyset).unwrap();
    let decoded: Keyset = decode_message(&bytes).unwrap();
    assert_eq!(decoded.primary_key_id, 42);
    assert_eq!(decoded.key.len(), 1);

    let key_data = decoded.key[0].key_data.as_ref().unwrap();
    assert_eq!(key_data.type_url, ECDH_AEAD_PRIVATE_KEY_TYPE_URL);

    let inner: EcdhAeadPrivateKey = decode_message(&key_data.value).unwrap();
    assert_eq!(inner, payload);

    let kw = inner
        .public_key
        .unwrap()
        .params
        .unwrap()
        .kw_params
        .unwrap();
    let curve = EcCurveType::try_from(kw.curve_type).unwrap();
    assert_eq!(curve.as_str_name(), "NIST_P256");
}

#[test]
fn test_malformed_bytes_fail_to_decode() {
    // 0xff carries wire type 7, which is not a valid protobuf wire type
    assert!(Keyset::decode(&b"\xff\xff\xff\xff"[..]).is_err());
    assert!(EcdhAeadPrivateKey::decode(&b"\xff\xff"[..]).is_err());
}

#[test]
fn test_unknown_curve_value_is_rejected() {
    assert!(EcCurveType::try_from(99).is_err());
    assert_eq!(EcCurveType::try_from(3).unwrap(), EcCurveType::NistP521);
}

#[test]
fn test_keyset_info_drops_payload_bytes() {
    let keyset = Keyset {
        primary_key_id: 7,
        key: vec![Key {
            key_data: Some(KeyData {
                type_url: "type.sealbox.dev/sealbox.crypto.TestKey".to_string(),
                value: vec![0xAA; 64],
                key_material_type: KeyMaterialType::Symmetric as i32,
            }),
            status: KeyStatus::Enabled as i32,
            key_id: 7,
        }],
    };

    let info = KeysetInfo::from_keyset(&keyset);
    assert_eq!(info.primary_key_id, 7);
    assert_eq!(info.key_info.len(), 1);
    assert_eq!(info.key_info[0].key_id, 7);
    // only the type name survives, never the payload
    let encoded = encode_message(&info).unwrap();
    let window: &[u8] = &[0xAA; 8];
    assert!(!encoded.windows(window.len()).any(|w| w == window));
}
