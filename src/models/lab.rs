use serde::{Deserialize, Serialize};

/// The seven measurements tracked for dialysis patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabKey {
    Hemoglobin,
    Ferritin,
    TransferrinSaturation,
    Calcium,
    Phosphorus,
    Pth,
    VitaminD,
}

impl LabKey {
    /// Every key, in the order values are displayed.
    pub const ALL: [LabKey; 7] = [
        LabKey::Hemoglobin,
        LabKey::Ferritin,
        LabKey::TransferrinSaturation,
        LabKey::Calcium,
        LabKey::Phosphorus,
        LabKey::Pth,
        LabKey::VitaminD,
    ];

    /// Key used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hemoglobin => "hemoglobina",
            Self::Ferritin => "ferritina",
            Self::TransferrinSaturation => "transferrina",
            Self::Calcium => "calcio",
            Self::Phosphorus => "fosforo",
            Self::Pth => "pth",
            Self::VitaminD => "vitamina_d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hemoglobin => "Hemoglobina",
            Self::Ferritin => "Ferritina",
            Self::TransferrinSaturation => "Saturação Transferrina",
            Self::Calcium => "Cálcio",
            Self::Phosphorus => "Fósforo",
            Self::Pth => "PTH",
            Self::VitaminD => "Vitamina D",
        }
    }

    /// Unit that must follow the number for a value to be accepted.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Hemoglobin => "g/dL",
            Self::Ferritin => "ng/mL",
            Self::TransferrinSaturation => "%",
            Self::Calcium | Self::Phosphorus => "mg/dL",
            Self::Pth => "pg/mL",
            Self::VitaminD => "ng/mL",
        }
    }
}

/// Extracted lab measurements. `None` means the value was not found in
/// the document; zero is a real reading, never a placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LabValues {
    pub hemoglobina: Option<f64>,
    pub ferritina: Option<f64>,
    pub transferrina: Option<f64>,
    pub calcio: Option<f64>,
    pub fosforo: Option<f64>,
    pub pth: Option<f64>,
    pub vitamina_d: Option<f64>,
}

impl LabValues {
    pub fn get(&self, key: LabKey) -> Option<f64> {
        match key {
            LabKey::Hemoglobin => self.hemoglobina,
            LabKey::Ferritin => self.ferritina,
            LabKey::TransferrinSaturation => self.transferrina,
            LabKey::Calcium => self.calcio,
            LabKey::Phosphorus => self.fosforo,
            LabKey::Pth => self.pth,
            LabKey::VitaminD => self.vitamina_d,
        }
    }

    pub fn set(&mut self, key: LabKey, value: Option<f64>) {
        let slot = match key {
            LabKey::Hemoglobin => &mut self.hemoglobina,
            LabKey::Ferritin => &mut self.ferritina,
            LabKey::TransferrinSaturation => &mut self.transferrina,
            LabKey::Calcium => &mut self.calcio,
            LabKey::Phosphorus => &mut self.fosforo,
            LabKey::Pth => &mut self.pth,
            LabKey::VitaminD => &mut self.vitamina_d,
        };
        *slot = value;
    }

    /// Builder-style setter, mostly for assembling fixtures.
    pub fn with(mut self, key: LabKey, value: f64) -> Self {
        self.set(key, Some(value));
        self
    }

    /// Present values in display order.
    pub fn present(&self) -> impl Iterator<Item = (LabKey, f64)> + '_ {
        LabKey::ALL
            .iter()
            .filter_map(move |key| self.get(*key).map(|v| (*key, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_values() {
        let values = LabValues::default();
        assert!(values.is_empty());
        for key in LabKey::ALL {
            assert_eq!(values.get(key), None);
        }
    }

    #[test]
    fn set_and_get_each_key() {
        let mut values = LabValues::default();
        for (i, key) in LabKey::ALL.iter().enumerate() {
            values.set(*key, Some(i as f64 + 0.5));
        }
        for (i, key) in LabKey::ALL.iter().enumerate() {
            assert_eq!(values.get(*key), Some(i as f64 + 0.5));
        }
    }

    #[test]
    fn zero_is_a_present_value() {
        let values = LabValues::default().with(LabKey::Ferritin, 0.0);
        assert!(!values.is_empty());
        assert_eq!(values.present().collect::<Vec<_>>(), vec![(LabKey::Ferritin, 0.0)]);
    }

    #[test]
    fn present_follows_display_order() {
        let values = LabValues::default()
            .with(LabKey::VitaminD, 12.0)
            .with(LabKey::Hemoglobin, 8.0);
        let keys: Vec<LabKey> = values.present().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![LabKey::Hemoglobin, LabKey::VitaminD]);
    }

    #[test]
    fn serializes_with_portuguese_keys() {
        let values = LabValues::default().with(LabKey::Pth, 720.0);
        let json = serde_json::to_value(values).unwrap();
        assert_eq!(json["pth"], 720.0);
        assert!(json["hemoglobina"].is_null());
        assert!(json.get("vitamina_d").is_some());
    }

    #[test]
    fn as_str_matches_field_names() {
        let json = serde_json::to_value(LabValues::default()).unwrap();
        for key in LabKey::ALL {
            assert!(json.get(key.as_str()).is_some(), "missing field {}", key.as_str());
        }
    }
}
