//! Key objects handed to the hybrid-encryption layer.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::curve::EcCurve;

/// An elliptic-curve private key: a named curve and the raw private scalar.
///
/// The scalar is zeroized on drop. Scalar length is not validated here; that
/// is the concern of whatever curve arithmetic consumes the key.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct EcPrivateKey {
    #[zeroize(skip)]
    curve: EcCurve,
    key_value: Vec<u8>,
}

impl EcPrivateKey {
    pub fn new(curve: EcCurve, key_value: Vec<u8>) -> Self {
        Self { curve, key_value }
    }

    pub fn curve(&self) -> EcCurve {
        self.curve
    }

    /// The private scalar, big-endian, exactly as carried by the keyset.
    pub fn as_bytes(&self) -> &[u8] {
        &self.key_value
    }
}
