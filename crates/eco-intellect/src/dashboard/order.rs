use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    #[default]
    Car,
    Motorcycle,
    ElectricVehicle,
    Bike,
}

impl TransportMode {
    pub const fn ordered() -> [Self; 4] {
        [Self::Car, Self::Motorcycle, Self::ElectricVehicle, Self::Bike]
    }

    /// Wire tag sent to the scoring service.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
            Self::ElectricVehicle => "electric_vehicle",
            Self::Bike => "bike",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Motorcycle => "Motorcycle",
            Self::ElectricVehicle => "Electric Vehicle",
            Self::Bike => "Bike",
        }
    }

    /// Lower-case form used inside sentences.
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
            Self::ElectricVehicle => "electric vehicle",
            Self::Bike => "bike",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Self::ordered()
            .into_iter()
            .find(|mode| mode.tag() == normalized)
            .ok_or_else(|| {
                format!("unknown transport mode '{raw}' (expected car, motorcycle, electric_vehicle or bike)")
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackagingType {
    #[default]
    Plastic,
    Paper,
    Biodegradable,
    Reusable,
}

impl PackagingType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Plastic,
            Self::Paper,
            Self::Biodegradable,
            Self::Reusable,
        ]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Plastic => "plastic",
            Self::Paper => "paper",
            Self::Biodegradable => "biodegradable",
            Self::Reusable => "reusable",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Plastic => "Plastic",
            Self::Paper => "Paper",
            Self::Biodegradable => "Biodegradable",
            Self::Reusable => "Reusable",
        }
    }
}

impl fmt::Display for PackagingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PackagingType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|packaging| packaging.tag() == normalized)
            .ok_or_else(|| {
                format!("unknown packaging type '{raw}' (expected plastic, paper, biodegradable or reusable)")
            })
    }
}

/// Order parameters as entered on the dashboard form.
///
/// Every field has a default, so a partially supplied record deserializes into
/// a complete one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderInput {
    pub distance_km: f64,
    pub transport_mode: TransportMode,
    pub packaging_type: PackagingType,
    pub estimated_time_minutes: u32,
    pub order_value: f64,
    pub frequency_per_week: u32,
}

impl Default for OrderInput {
    fn default() -> Self {
        Self {
            distance_km: 5.0,
            transport_mode: TransportMode::Car,
            packaging_type: PackagingType::Plastic,
            estimated_time_minutes: 30,
            order_value: 350.0,
            frequency_per_week: 3,
        }
    }
}

/// A numeric field outside the range the order form allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("distance_km must be greater than zero")]
    Distance,
    #[error("estimated_time_minutes must be at least 1")]
    EstimatedTime,
    #[error("order_value must not be negative")]
    OrderValue,
}

impl OrderInput {
    /// Check the numeric ranges; the enums are valid by construction.
    pub fn validate(&self) -> Result<(), OrderError> {
        if !(self.distance_km.is_finite() && self.distance_km > 0.0) {
            return Err(OrderError::Distance);
        }
        if self.estimated_time_minutes == 0 {
            return Err(OrderError::EstimatedTime);
        }
        if !(self.order_value.is_finite() && self.order_value >= 0.0) {
            return Err(OrderError::OrderValue);
        }
        Ok(())
    }

    /// "(electric vehicle + plastic)" style description of the current choice.
    pub fn choice_phrase(&self) -> String {
        format!(
            "{} + {}",
            self.transport_mode.phrase(),
            self.packaging_type.tag()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_enums_as_wire_tags() {
        let input = OrderInput {
            transport_mode: TransportMode::ElectricVehicle,
            packaging_type: PackagingType::Biodegradable,
            ..OrderInput::default()
        };

        let payload = serde_json::to_value(&input).expect("order serializes");
        assert_eq!(
            payload,
            json!({
                "distance_km": 5.0,
                "transport_mode": "electric_vehicle",
                "packaging_type": "biodegradable",
                "estimated_time_minutes": 30,
                "order_value": 350.0,
                "frequency_per_week": 3
            })
        );
    }

    #[test]
    fn partial_payload_fills_defaults() {
        let input: OrderInput =
            serde_json::from_value(json!({ "distance_km": 12.5, "transport_mode": "bike" }))
                .expect("partial order deserializes");

        assert_eq!(input.distance_km, 12.5);
        assert_eq!(input.transport_mode, TransportMode::Bike);
        assert_eq!(input.packaging_type, PackagingType::Plastic);
        assert_eq!(input.frequency_per_week, 3);
    }

    #[test]
    fn labels_and_phrases_follow_display_rules() {
        assert_eq!(TransportMode::ElectricVehicle.label(), "Electric Vehicle");
        let input = OrderInput {
            transport_mode: TransportMode::ElectricVehicle,
            ..OrderInput::default()
        };
        assert_eq!(input.choice_phrase(), "electric vehicle + plastic");
    }

    #[test]
    fn parses_cli_spellings() {
        assert_eq!(
            "Electric Vehicle".parse::<TransportMode>(),
            Ok(TransportMode::ElectricVehicle)
        );
        assert_eq!(
            "electric-vehicle".parse::<TransportMode>(),
            Ok(TransportMode::ElectricVehicle)
        );
        assert_eq!("PAPER".parse::<PackagingType>(), Ok(PackagingType::Paper));
        assert!("walk".parse::<TransportMode>().is_err());
    }

    #[test]
    fn validation_rejects_out_of_range_numbers() {
        assert_eq!(OrderInput::default().validate(), Ok(()));

        let free_order = OrderInput {
            order_value: 0.0,
            frequency_per_week: 0,
            ..OrderInput::default()
        };
        assert_eq!(free_order.validate(), Ok(()));

        let cases = [
            (
                OrderInput {
                    distance_km: -3.0,
                    ..OrderInput::default()
                },
                OrderError::Distance,
            ),
            (
                OrderInput {
                    distance_km: 0.0,
                    ..OrderInput::default()
                },
                OrderError::Distance,
            ),
            (
                OrderInput {
                    estimated_time_minutes: 0,
                    ..OrderInput::default()
                },
                OrderError::EstimatedTime,
            ),
            (
                OrderInput {
                    order_value: -1.0,
                    ..OrderInput::default()
                },
                OrderError::OrderValue,
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(input.validate(), Err(expected), "{input:?}");
        }
    }
}
