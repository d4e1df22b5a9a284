//! ECDH-ES AEAD key payload messages.
//!
//! The private-key payload nests its public-key descriptor, which in turn
//! carries the key-wrapping parameters naming the curve. The raw private
//! scalar lives in `key_value`, untransformed.

/// Type URL identifying an [`EcdhAeadPrivateKey`] payload inside a
/// [`KeyData`](crate::keyset::KeyData) entry.
pub const ECDH_AEAD_PRIVATE_KEY_TYPE_URL: &str =
    "type.sealbox.dev/sealbox.crypto.EcdhAeadPrivateKey";

/// Named elliptic curves supported by the key-wrapping layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum EcCurveType {
    UnknownCurve = 0,
    NistP256 = 1,
    NistP384 = 2,
    NistP521 = 3,
}

impl EcCurveType {
    /// The canonical string name of the enum value, as it appears on the
    /// wire-format definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            EcCurveType::UnknownCurve => "UNKNOWN_CURVE",
            EcCurveType::NistP256 => "NIST_P256",
            EcCurveType::NistP384 => "NIST_P384",
            EcCurveType::NistP521 => "NIST_P521",
        }
    }
}

/// Serialization format for elliptic-curve points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum EcPointFormat {
    UnknownFormat = 0,
    Uncompressed = 1,
    Compressed = 2,
}

/// Key-wrapping parameters: the curve the KEM key pair lives on.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EcdhKwParams {
    #[prost(enumeration = "EcCurveType", tag = "1")]
    pub curve_type: i32,
}

/// Content-encryption parameters for the wrapped payload.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EcdhAeadEncParams {
    /// AEAD algorithm used for content encryption, e.g. `"AES256-GCM"`.
    #[prost(string, tag = "1")]
    pub aead_alg: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EcdhAeadParams {
    #[prost(message, optional, tag = "1")]
    pub kw_params: Option<EcdhKwParams>,
    #[prost(message, optional, tag = "2")]
    pub enc_params: Option<EcdhAeadEncParams>,
    #[prost(enumeration = "EcPointFormat", tag = "3")]
    pub ec_point_format: i32,
}

/// Public half of an ECDH-ES AEAD key pair.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EcdhAeadPublicKey {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(message, optional, tag = "2")]
    pub params: Option<EcdhAeadParams>,
    /// Affine x coordinate, big-endian.
    #[prost(bytes = "vec", tag = "3")]
    pub x: Vec<u8>,
    /// Affine y coordinate, big-endian.
    #[prost(bytes = "vec", tag = "4")]
    pub y: Vec<u8>,
}

/// Private half of an ECDH-ES AEAD key pair.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EcdhAeadPrivateKey {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(message, optional, tag = "2")]
    pub public_key: Option<EcdhAeadPublicKey>,
    /// The private scalar, big-endian, untransformed.
    #[prost(bytes = "vec", tag = "3")]
    pub key_value: Vec<u8>,
}
