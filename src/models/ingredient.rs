use serde::{Deserialize, Serialize};

/// Conversion factor for the pulse derivation: pulses dose milligrams,
/// quantity is tracked in grams.
pub const PULSE_DIVISOR: f64 = 1000.0;

/// One row of a cost simulation: a quantity of a reference material
/// consumed per production batch.
///
/// `unit_price` is a what-if override; when absent the live reference
/// price from the price book applies. `pulses` and `amount_per_pulse`
/// exist only to back-compute `quantity` on dosing equipment that counts
/// pulses; editing `quantity` directly leaves them untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLine {
    pub supply_id: u32,

    pub quantity: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulses: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_per_pulse: Option<f64>,
}

impl IngredientLine {
    pub fn new(supply_id: u32, quantity: f64) -> Self {
        Self {
            supply_id,
            quantity,
            unit_price: None,
            pulses: None,
            amount_per_pulse: None,
        }
    }

    /// Quantity derived from the pulse pair, when both are known.
    pub fn derived_quantity(&self) -> Option<f64> {
        match (self.pulses, self.amount_per_pulse) {
            (Some(p), Some(a)) => Some(p * a / PULSE_DIVISOR),
            _ => None,
        }
    }

    /// Whether a what-if price override is active on this line.
    pub fn has_override(&self) -> bool {
        self.unit_price.is_some()
    }

    /// Basic validation: non-negative quantity and prices.
    pub fn is_valid(&self) -> bool {
        self.quantity >= 0.0
            && self.unit_price.is_none_or(|p| p >= 0.0)
            && self.pulses.is_none_or(|p| p >= 0.0)
            && self.amount_per_pulse.is_none_or(|a| a >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_line() -> IngredientLine {
        IngredientLine {
            supply_id: 7,
            quantity: 10.0,
            unit_price: Some(5.0),
            pulses: None,
            amount_per_pulse: None,
        }
    }

    #[test]
    fn test_derived_quantity_requires_both_fields() {
        let mut line = sample_line();
        assert_eq!(line.derived_quantity(), None);

        line.pulses = Some(40.0);
        assert_eq!(line.derived_quantity(), None);

        line.amount_per_pulse = Some(500.0);
        assert_eq!(line.derived_quantity(), Some(20.0));
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_line().is_valid());

        let mut invalid = sample_line();
        invalid.quantity = -1.0;
        assert!(!invalid.is_valid());

        let mut invalid = sample_line();
        invalid.unit_price = Some(-0.5);
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let json = serde_json::to_string(&sample_line()).unwrap();
        assert!(json.contains("\"supplyId\":7"));
        assert!(json.contains("\"unitPrice\":5.0"));
        assert!(!json.contains("pulses"));
    }
}
