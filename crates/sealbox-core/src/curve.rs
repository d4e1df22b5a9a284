//! Named-curve registry for ECDH-ES key wrapping.

use std::str::FromStr;

use crate::error::CurveError;

/// Named elliptic curves supported for key wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EcCurve {
    /// NIST P-256 (secp256r1)
    #[serde(rename = "p-256")]
    P256,
    /// NIST P-384 (secp384r1)
    #[serde(rename = "p-384")]
    P384,
    /// NIST P-521 (secp521r1)
    #[serde(rename = "p-521")]
    P521,
}

impl EcCurve {
    /// Size of a private scalar on this curve, in bytes.
    pub fn scalar_size(&self) -> usize {
        match self {
            EcCurve::P256 => 32,
            EcCurve::P384 => 48,
            EcCurve::P521 => 66,
        }
    }

    /// Size of an affine point coordinate on this curve, in bytes.
    pub fn coordinate_size(&self) -> usize {
        self.scalar_size()
    }
}

impl std::fmt::Display for EcCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EcCurve::P256 => write!(f, "P-256"),
            EcCurve::P384 => write!(f, "P-384"),
            EcCurve::P521 => write!(f, "P-521"),
        }
    }
}

impl FromStr for EcCurve {
    type Err = CurveError;

    /// Resolve a curve identifier. Accepts the wire-format enum names
    /// (`NIST_P256`), the display names (`P-256`), and the SEC aliases
    /// (`secp256r1`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nist_p256" | "nist_p-256" | "p-256" | "p256" | "secp256r1" => Ok(EcCurve::P256),
            "nist_p384" | "nist_p-384" | "p-384" | "p384" | "secp384r1" => Ok(EcCurve::P384),
            "nist_p521" | "nist_p-521" | "p-521" | "p521" | "secp521r1" => Ok(EcCurve::P521),
            other => Err(CurveError::Unsupported(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_wire_names_and_aliases() {
        assert_eq!("NIST_P256".parse::<EcCurve>().unwrap(), EcCurve::P256);
        assert_eq!("P-384".parse::<EcCurve>().unwrap(), EcCurve::P384);
        assert_eq!("secp521r1".parse::<EcCurve>().unwrap(), EcCurve::P521);
        assert_eq!("p256".parse::<EcCurve>().unwrap(), EcCurve::P256);
    }

    #[test]
    fn test_unknown_names_fail() {
        assert!("NIST_P224".parse::<EcCurve>().is_err());
        assert!("UNKNOWN_CURVE".parse::<EcCurve>().is_err());
        assert!("".parse::<EcCurve>().is_err());
    }

    #[test]
    fn test_scalar_sizes() {
        assert_eq!(EcCurve::P256.scalar_size(), 32);
        assert_eq!(EcCurve::P384.scalar_size(), 48);
        assert_eq!(EcCurve::P521.scalar_size(), 66);
    }

    #[test]
    fn test_display_roundtrips_through_registry() {
        for curve in [EcCurve::P256, EcCurve::P384, EcCurve::P521] {
            assert_eq!(curve.to_string().parse::<EcCurve>().unwrap(), curve);
        }
    }
}
