use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Loamy,
    Sandy,
    Clayey,
    Silt,
    Peat,
}

impl SoilType {
    pub fn all() -> &'static [SoilType] {
        &[
            SoilType::Loamy,
            SoilType::Sandy,
            SoilType::Clayey,
            SoilType::Silt,
            SoilType::Peat,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Loamy => "Loamy",
            SoilType::Sandy => "Sandy",
            SoilType::Clayey => "Clayey",
            SoilType::Silt => "Silt",
            SoilType::Peat => "Peat",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "loamy" | "loam" => Some(SoilType::Loamy),
            "sandy" | "sand" => Some(SoilType::Sandy),
            "clayey" | "clay" => Some(SoilType::Clayey),
            "silt" | "silty" => Some(SoilType::Silt),
            "peat" | "peaty" => Some(SoilType::Peat),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropType {
    Rice,
    Maize,
    Wheat,
    Millet,
    Cotton,
    Pulses,
    Vegetables,
}

impl CropType {
    pub fn all() -> &'static [CropType] {
        &[
            CropType::Rice,
            CropType::Maize,
            CropType::Wheat,
            CropType::Millet,
            CropType::Cotton,
            CropType::Pulses,
            CropType::Vegetables,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Rice => "Rice",
            CropType::Maize => "Maize",
            CropType::Wheat => "Wheat",
            CropType::Millet => "Millet",
            CropType::Cotton => "Cotton",
            CropType::Pulses => "Pulses",
            CropType::Vegetables => "Vegetables",
        }
    }

    /// Cereal crops with a heavy nitrogen demand during grain fill.
    pub fn is_grain(&self) -> bool {
        matches!(self, CropType::Rice | CropType::Maize)
    }

    /// Crops whose marketable yield is fruit or fibre quality.
    pub fn is_quality_sensitive(&self) -> bool {
        matches!(self, CropType::Vegetables | CropType::Cotton)
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rice" | "paddy" => Some(CropType::Rice),
            "maize" | "corn" => Some(CropType::Maize),
            "wheat" => Some(CropType::Wheat),
            "millet" => Some(CropType::Millet),
            "cotton" => Some(CropType::Cotton),
            "pulses" | "pulse" => Some(CropType::Pulses),
            "vegetables" | "vegetable" => Some(CropType::Vegetables),
            _ => None,
        }
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Categorical conditions of the field a reading was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProfile {
    pub soil_type: SoilType,
    pub crop_type: CropType,
}

impl FieldProfile {
    pub fn new(soil_type: SoilType, crop_type: CropType) -> Self {
        Self {
            soil_type,
            crop_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soil_type_from_str_valid() {
        assert_eq!(SoilType::from_str("Loamy"), Some(SoilType::Loamy));
        assert_eq!(SoilType::from_str("clay"), Some(SoilType::Clayey));
        assert_eq!(SoilType::from_str("SANDY"), Some(SoilType::Sandy));
        assert_eq!(SoilType::from_str(" silt "), Some(SoilType::Silt));
        assert_eq!(SoilType::from_str("peat"), Some(SoilType::Peat));
    }

    #[test]
    fn soil_type_from_str_invalid() {
        assert_eq!(SoilType::from_str("dirt"), None);
        assert_eq!(SoilType::from_str(""), None);
    }

    #[test]
    fn soil_type_round_trip() {
        for soil in SoilType::all() {
            let debug_str = format!("{:?}", soil);
            assert_eq!(
                SoilType::from_str(&debug_str),
                Some(*soil),
                "Round-trip failed for {:?}",
                soil
            );
        }
    }

    #[test]
    fn crop_type_from_str_valid() {
        assert_eq!(CropType::from_str("Rice"), Some(CropType::Rice));
        assert_eq!(CropType::from_str("corn"), Some(CropType::Maize));
        assert_eq!(CropType::from_str("vegetable"), Some(CropType::Vegetables));
        assert_eq!(CropType::from_str("PULSES"), Some(CropType::Pulses));
    }

    #[test]
    fn crop_type_from_str_invalid() {
        assert_eq!(CropType::from_str("barley"), None);
        assert_eq!(CropType::from_str(""), None);
    }

    #[test]
    fn crop_type_round_trip() {
        for crop in CropType::all() {
            assert_eq!(CropType::from_str(crop.as_str()), Some(*crop));
        }
    }

    #[test]
    fn crop_groups() {
        assert!(CropType::Rice.is_grain());
        assert!(CropType::Maize.is_grain());
        assert!(!CropType::Wheat.is_grain());
        assert!(CropType::Cotton.is_quality_sensitive());
        assert!(CropType::Vegetables.is_quality_sensitive());
        assert!(!CropType::Pulses.is_quality_sensitive());
    }

    #[test]
    fn enumerations_are_complete() {
        assert_eq!(SoilType::all().len(), 5);
        assert_eq!(CropType::all().len(), 7);
    }
}
