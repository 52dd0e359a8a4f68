//! Rake, wagon, and order records plus the display enumerations

use serde::{Deserialize, Serialize};

/// Shipment priority - drives the display color of an order's primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Display color as linear-ish RGB in 0.0-1.0
    pub fn color(&self) -> [f32; 3] {
        match self {
            Priority::High => [1.0, 0.267, 0.267],
            Priority::Medium => [1.0, 0.667, 0.0],
            Priority::Low => [0.0, 0.8, 0.4],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

/// Which geometry primitive represents an order
///
/// Deserialization falls back to `Box` for unrecognized shape strings so
/// bad display metadata never fails scene construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum OrderShape {
    #[default]
    Box,
    Cylinder,
    Sphere,
}

impl From<String> for OrderShape {
    fn from(s: String) -> Self {
        match s.as_str() {
            "cylinder" => OrderShape::Cylinder,
            "sphere" => OrderShape::Sphere,
            "box" => OrderShape::Box,
            other => {
                tracing::debug!("Unrecognized order shape {:?}, falling back to box", other);
                OrderShape::Box
            }
        }
    }
}

impl OrderShape {
    pub fn label(&self) -> &'static str {
        match self {
            OrderShape::Box => "box",
            OrderShape::Cylinder => "cylinder",
            OrderShape::Sphere => "sphere",
        }
    }
}

/// Physical dimensions of an order in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f32,
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(length: f32, width: f32, height: f32) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

/// A shipment request carried by a wagon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Material quantity in kg
    #[serde(rename = "qty")]
    pub quantity: f64,
    /// Destination label
    #[serde(rename = "dest")]
    pub destination: String,
    pub priority: Priority,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub shape: OrderShape,
}

/// Three-level classification of a wagon's load ratio, used for the
/// fill bar color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilizationBand {
    Normal,
    Warning,
    Critical,
}

impl UtilizationBand {
    /// Normal below 0.70, Warning in [0.70, 0.90), Critical at or above 0.90
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio >= 0.90 {
            UtilizationBand::Critical
        } else if ratio >= 0.70 {
            UtilizationBand::Warning
        } else {
            UtilizationBand::Normal
        }
    }

    /// Fill bar color for this band
    pub fn color(&self) -> [f32; 3] {
        match self {
            UtilizationBand::Normal => [0.063, 0.725, 0.506],
            UtilizationBand::Warning => [0.961, 0.62, 0.043],
            UtilizationBand::Critical => [0.937, 0.267, 0.267],
        }
    }
}

/// A single rail freight car with its loaded orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wagon {
    #[serde(rename = "wagonId")]
    pub id: String,
    /// Total capacity in kg
    pub capacity: f64,
    /// Current load in kg. May legitimately exceed capacity (overload);
    /// display clamps, tooltips keep the true value.
    #[serde(rename = "currentLoad")]
    pub current_load: f64,
    /// Display color as RGB in 0.0-1.0
    pub color: [f32; 3],
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Wagon {
    /// True load ratio; 0 when capacity is 0
    pub fn utilization(&self) -> f32 {
        if self.capacity <= 0.0 {
            0.0
        } else {
            (self.current_load / self.capacity) as f32
        }
    }

    /// Load ratio clamped to [0, 1] for the fill bar
    pub fn display_utilization(&self) -> f32 {
        self.utilization().clamp(0.0, 1.0)
    }

    pub fn band(&self) -> UtilizationBand {
        UtilizationBand::from_ratio(self.utilization())
    }

    /// Remaining capacity in kg; negative when overloaded
    pub fn remaining(&self) -> f64 {
        self.capacity - self.current_load
    }
}

/// A train consist - an ordered set of wagons coupled for one journey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rake {
    #[serde(rename = "rakeId")]
    pub id: String,
    #[serde(default)]
    pub wagons: Vec<Wagon>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wagon(capacity: f64, load: f64) -> Wagon {
        Wagon {
            id: "W01".to_string(),
            capacity,
            current_load: load,
            color: [0.2, 0.5, 1.0],
            orders: Vec::new(),
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(UtilizationBand::from_ratio(0.0), UtilizationBand::Normal);
        assert_eq!(UtilizationBand::from_ratio(0.699), UtilizationBand::Normal);
        assert_eq!(UtilizationBand::from_ratio(0.70), UtilizationBand::Warning);
        assert_eq!(UtilizationBand::from_ratio(0.899), UtilizationBand::Warning);
        assert_eq!(UtilizationBand::from_ratio(0.90), UtilizationBand::Critical);
        assert_eq!(UtilizationBand::from_ratio(1.5), UtilizationBand::Critical);
    }

    #[test]
    fn test_scenario_bands() {
        // 53000/60000 ~ 88.3% -> warning, 55000/60000 ~ 91.7% -> critical
        assert_eq!(wagon(60000.0, 53000.0).band(), UtilizationBand::Warning);
        assert_eq!(wagon(60000.0, 55000.0).band(), UtilizationBand::Critical);
    }

    #[test]
    fn test_zero_capacity_has_no_nan() {
        let w = wagon(0.0, 1000.0);
        assert_eq!(w.utilization(), 0.0);
        assert_eq!(w.band(), UtilizationBand::Normal);
    }

    #[test]
    fn test_overload_clamps_display_only() {
        let w = wagon(60000.0, 72000.0);
        assert!(w.utilization() > 1.0);
        assert_eq!(w.display_utilization(), 1.0);
        assert_eq!(w.band(), UtilizationBand::Critical);
        assert_eq!(w.remaining(), -12000.0);
    }

    #[test]
    fn test_unknown_shape_falls_back_to_box() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": "ORD-1",
                "qty": 1000,
                "dest": "Mumbai",
                "priority": "HIGH",
                "dimensions": { "length": 2.0, "width": 1.0, "height": 1.0 },
                "shape": "dodecahedron"
            }"#,
        )
        .unwrap();
        assert_eq!(order.shape, OrderShape::Box);
    }

    #[test]
    fn test_shape_parses_known_values() {
        for (s, expected) in [
            ("box", OrderShape::Box),
            ("cylinder", OrderShape::Cylinder),
            ("sphere", OrderShape::Sphere),
        ] {
            assert_eq!(OrderShape::from(s.to_string()), expected);
        }
    }
}
