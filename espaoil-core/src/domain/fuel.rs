//! Fuel type vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown fuel type code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fuel type code: {0}")]
pub struct InvalidFuelType(String);

/// A fuel category sold at a station.
///
/// The 14 codes mirror the upstream price service's vocabulary exactly
/// and must not be renamed: they travel on the wire as the `gasType`
/// query parameter and inside persisted search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    #[serde(rename = "GASOLINA_95_E5")]
    Gasolina95E5,
    #[serde(rename = "GASOLINA_95_E5_PREMIUM")]
    Gasolina95E5Premium,
    #[serde(rename = "GASOLINA_95_E10")]
    Gasolina95E10,
    #[serde(rename = "GASOLINA_98_E5")]
    Gasolina98E5,
    #[serde(rename = "GASOLINA_98_E10")]
    Gasolina98E10,
    #[serde(rename = "GASOIL_A")]
    GasoilA,
    #[serde(rename = "GASOIL_B")]
    GasoilB,
    #[serde(rename = "GASOIL_PREMIUM")]
    GasoilPremium,
    #[serde(rename = "BIODIESEL")]
    Biodiesel,
    #[serde(rename = "BIOETANOL")]
    Bioetanol,
    #[serde(rename = "GAS_NATURAL_COMPRIMIDO")]
    GasNaturalComprimido,
    #[serde(rename = "GAS_NATURAL_LICUADO")]
    GasNaturalLicuado,
    #[serde(rename = "GASES_LICUADOS_PETROLEO")]
    GasesLicuadosPetroleo,
    #[serde(rename = "HIDROGENO")]
    Hidrogeno,
}

impl FuelType {
    /// All known fuel types, in upstream order.
    pub const ALL: [FuelType; 14] = [
        FuelType::Gasolina95E5,
        FuelType::Gasolina95E5Premium,
        FuelType::Gasolina95E10,
        FuelType::Gasolina98E5,
        FuelType::Gasolina98E10,
        FuelType::GasoilA,
        FuelType::GasoilB,
        FuelType::GasoilPremium,
        FuelType::Biodiesel,
        FuelType::Bioetanol,
        FuelType::GasNaturalComprimido,
        FuelType::GasNaturalLicuado,
        FuelType::GasesLicuadosPetroleo,
        FuelType::Hidrogeno,
    ];

    /// The upstream wire code for this fuel type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasolina95E5 => "GASOLINA_95_E5",
            FuelType::Gasolina95E5Premium => "GASOLINA_95_E5_PREMIUM",
            FuelType::Gasolina95E10 => "GASOLINA_95_E10",
            FuelType::Gasolina98E5 => "GASOLINA_98_E5",
            FuelType::Gasolina98E10 => "GASOLINA_98_E10",
            FuelType::GasoilA => "GASOIL_A",
            FuelType::GasoilB => "GASOIL_B",
            FuelType::GasoilPremium => "GASOIL_PREMIUM",
            FuelType::Biodiesel => "BIODIESEL",
            FuelType::Bioetanol => "BIOETANOL",
            FuelType::GasNaturalComprimido => "GAS_NATURAL_COMPRIMIDO",
            FuelType::GasNaturalLicuado => "GAS_NATURAL_LICUADO",
            FuelType::GasesLicuadosPetroleo => "GASES_LICUADOS_PETROLEO",
            FuelType::Hidrogeno => "HIDROGENO",
        }
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Gasolina95E5 => "95 E5",
            FuelType::Gasolina95E5Premium => "95 E5 Premium",
            FuelType::Gasolina95E10 => "95 E10",
            FuelType::Gasolina98E5 => "98 E5",
            FuelType::Gasolina98E10 => "98 E10",
            FuelType::GasoilA => "Gasoil A",
            FuelType::GasoilB => "Gasoil B",
            FuelType::GasoilPremium => "Gasoil Premium",
            FuelType::Biodiesel => "Biodiesel",
            FuelType::Bioetanol => "Bioetanol",
            FuelType::GasNaturalComprimido => "Gas Natural Comprimido",
            FuelType::GasNaturalLicuado => "Gas Natural Licuado",
            FuelType::GasesLicuadosPetroleo => "Gases licuados del petróleo",
            FuelType::Hidrogeno => "Hidrógeno",
        }
    }
}

impl FromStr for FuelType {
    type Err = InvalidFuelType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == s)
            .ok_or_else(|| InvalidFuelType(s.to_string()))
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourteen_known_codes() {
        assert_eq!(FuelType::ALL.len(), 14);
    }

    #[test]
    fn code_roundtrip_for_all() {
        for fuel in FuelType::ALL {
            assert_eq!(fuel.as_str().parse::<FuelType>().unwrap(), fuel);
        }
    }

    #[test]
    fn unknown_code_rejected() {
        assert!("DIESEL".parse::<FuelType>().is_err());
        assert!("gasolina_95_e5".parse::<FuelType>().is_err());
        assert!("".parse::<FuelType>().is_err());
    }

    #[test]
    fn serde_uses_upstream_codes() {
        let json = serde_json::to_string(&FuelType::GasoilPremium).unwrap();
        assert_eq!(json, "\"GASOIL_PREMIUM\"");

        let fuel: FuelType = serde_json::from_str("\"GASES_LICUADOS_PETROLEO\"").unwrap();
        assert_eq!(fuel, FuelType::GasesLicuadosPetroleo);
    }

    #[test]
    fn serde_rejects_unknown_code() {
        assert!(serde_json::from_str::<FuelType>("\"KEROSENE\"").is_err());
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(FuelType::Hidrogeno.to_string(), "HIDROGENO");
    }
}
