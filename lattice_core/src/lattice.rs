//! # Lattice Families
//!
//! The closed set of Bravais lattice families the engine knows about and the
//! kinds of deformation system it catalogs. Strings are parsed once, at the
//! boundary, into these enums; everything downstream dispatches with `match`.
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::lattice::{LatticeFamily, SystemKind};
//!
//! let family = LatticeFamily::from_str_flexible("hcp").unwrap();
//! assert_eq!(family, LatticeFamily::Hp);
//! assert_eq!(family.code(), "hP");
//! assert!(family.uses_miller_bravais());
//!
//! let kind = SystemKind::from_str_flexible("twin").unwrap();
//! assert_eq!(kind, SystemKind::Twin);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{LatticeError, LatticeResult};

/// Bravais lattice family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatticeFamily {
    /// Face-centered cubic
    #[serde(rename = "cF")]
    Cf,
    /// Body-centered cubic
    #[serde(rename = "cI")]
    Ci,
    /// Hexagonal close-packed
    #[serde(rename = "hP")]
    Hp,
    /// Body-centered tetragonal
    #[serde(rename = "tI")]
    Ti,
}

impl LatticeFamily {
    pub const ALL: [LatticeFamily; 4] = [
        LatticeFamily::Cf,
        LatticeFamily::Ci,
        LatticeFamily::Hp,
        LatticeFamily::Ti,
    ];

    /// Pearson-symbol code ("cF", "cI", "hP", "tI")
    pub fn code(&self) -> &'static str {
        match self {
            LatticeFamily::Cf => "cF",
            LatticeFamily::Ci => "cI",
            LatticeFamily::Hp => "hP",
            LatticeFamily::Ti => "tI",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> LatticeResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "cf" | "fcc" => Ok(LatticeFamily::Cf),
            "ci" | "bcc" => Ok(LatticeFamily::Ci),
            "hp" | "hex" | "hcp" => Ok(LatticeFamily::Hp),
            "ti" | "bct" => Ok(LatticeFamily::Ti),
            _ => Err(LatticeError::unsupported(s, "any")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            LatticeFamily::Cf => "Face-Centered Cubic",
            LatticeFamily::Ci => "Body-Centered Cubic",
            LatticeFamily::Hp => "Hexagonal Close-Packed",
            LatticeFamily::Ti => "Body-Centered Tetragonal",
        }
    }

    pub fn is_cubic(&self) -> bool {
        matches!(self, LatticeFamily::Cf | LatticeFamily::Ci)
    }

    /// Whether systems are given as 4-index Miller-Bravais vectors
    pub fn uses_miller_bravais(&self) -> bool {
        matches!(self, LatticeFamily::Hp)
    }

    /// Whether frame construction needs a c/a ratio
    pub fn requires_c_over_a(&self) -> bool {
        matches!(self, LatticeFamily::Hp | LatticeFamily::Ti)
    }
}

impl std::fmt::Display for LatticeFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Kind of deformation system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemKind {
    Slip,
    Twin,
    Transformation,
    Cleavage,
}

impl SystemKind {
    pub const ALL: [SystemKind; 4] = [
        SystemKind::Slip,
        SystemKind::Twin,
        SystemKind::Transformation,
        SystemKind::Cleavage,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SystemKind::Slip => "slip",
            SystemKind::Twin => "twin",
            SystemKind::Transformation => "transformation",
            SystemKind::Cleavage => "cleavage",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> LatticeResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "slip" | "sl" => Ok(SystemKind::Slip),
            "twin" | "tw" => Ok(SystemKind::Twin),
            "transformation" | "trans" | "tr" => Ok(SystemKind::Transformation),
            "cleavage" | "cl" => Ok(SystemKind::Cleavage),
            _ => Err(LatticeError::invalid_input(
                "kind",
                s,
                "expected one of slip, twin, transformation, cleavage",
            )),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SystemKind::Slip => "Slip",
            SystemKind::Twin => "Twin",
            SystemKind::Transformation => "Transformation",
            SystemKind::Cleavage => "Cleavage",
        }
    }
}

impl std::fmt::Display for SystemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_parsing() {
        assert_eq!(LatticeFamily::from_str_flexible("cF").unwrap(), LatticeFamily::Cf);
        assert_eq!(LatticeFamily::from_str_flexible("FCC").unwrap(), LatticeFamily::Cf);
        assert_eq!(LatticeFamily::from_str_flexible("bcc").unwrap(), LatticeFamily::Ci);
        assert_eq!(LatticeFamily::from_str_flexible("hex").unwrap(), LatticeFamily::Hp);
        assert_eq!(LatticeFamily::from_str_flexible("bct").unwrap(), LatticeFamily::Ti);
        assert!(LatticeFamily::from_str_flexible("oP").is_err());
    }

    #[test]
    fn test_family_code_roundtrip() {
        for family in LatticeFamily::ALL {
            assert_eq!(LatticeFamily::from_str_flexible(family.code()).unwrap(), family);
        }
    }

    #[test]
    fn test_family_serialization() {
        let json = serde_json::to_string(&LatticeFamily::Hp).unwrap();
        assert_eq!(json, "\"hP\"");
        let family: LatticeFamily = serde_json::from_str("\"tI\"").unwrap();
        assert_eq!(family, LatticeFamily::Ti);
    }

    #[test]
    fn test_unknown_family_error_code() {
        let err = LatticeFamily::from_str_flexible("aP").unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_LATTICE");
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(SystemKind::from_str_flexible("Trans").unwrap(), SystemKind::Transformation);
        assert_eq!(SystemKind::from_str_flexible("CLEAVAGE").unwrap(), SystemKind::Cleavage);
        assert!(SystemKind::from_str_flexible("kink").is_err());
    }

    #[test]
    fn test_family_properties() {
        assert!(LatticeFamily::Cf.is_cubic());
        assert!(!LatticeFamily::Ti.is_cubic());
        assert!(LatticeFamily::Ti.requires_c_over_a());
        assert!(!LatticeFamily::Ti.uses_miller_bravais());
    }
}
