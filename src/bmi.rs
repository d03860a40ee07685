//! Body-mass index calculation and classification
//!
//! BMI = weight_kg / height_m². Values are computed with exact decimal
//! arithmetic and rounded half-up to two places. The category is assigned
//! from the unrounded value; only the reported number is rounded, so a raw
//! 18.4965 reports as 18.50 yet stays Underweight.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CalculationError;

/// Lower bound of the Normal category
pub const NORMAL_MIN: Decimal = dec!(18.5);

/// Lower bound of the Overweight category
pub const OVERWEIGHT_MIN: Decimal = dec!(25);

/// Lower bound of the Obese category
pub const OBESE_MIN: Decimal = dec!(30);

/// BMI classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    ///
    /// - Underweight: < 18.5
    /// - Normal: 18.5 - 24.99
    /// - Overweight: 25 - 29.99
    /// - Obese: >= 30
    pub fn from_bmi(bmi: Decimal) -> Self {
        if bmi < NORMAL_MIN {
            BmiCategory::Underweight
        } else if bmi < OVERWEIGHT_MIN {
            BmiCategory::Normal
        } else if bmi < OBESE_MIN {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Hex color token used when rendering this category
    pub fn display_color(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "#FFA500",
            BmiCategory::Normal => "#4CAF50",
            BmiCategory::Overweight => "#FF9800",
            BmiCategory::Obese => "#F44336",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::Normal => write!(f, "Normal"),
            BmiCategory::Overweight => write!(f, "Overweight"),
            BmiCategory::Obese => write!(f, "Obese"),
        }
    }
}

/// Result of a BMI calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to two decimal places
    pub value: Decimal,

    pub category: BmiCategory,

    /// Color token paired with `category`
    pub display_color: String,
}

/// BMI calculation utilities
pub struct BmiCalculator;

impl BmiCalculator {
    /// Calculate and classify BMI
    ///
    /// Height must be positive; callers are expected to validate the profile
    /// first. Use [`BmiCalculator::try_calculate`] for unchecked input.
    pub fn calculate(weight_kg: Decimal, height_cm: Decimal) -> BmiResult {
        let height_m = height_cm / dec!(100);
        let raw = weight_kg / (height_m * height_m);
        Self::classify(raw)
    }

    /// Calculate BMI, rejecting non-positive weight or height
    pub fn try_calculate(
        weight_kg: Decimal,
        height_cm: Decimal,
    ) -> Result<BmiResult, CalculationError> {
        if height_cm <= Decimal::ZERO {
            return Err(CalculationError::NonPositiveInput {
                calculation: "BMI",
                parameter: "height_cm",
                value: height_cm.to_string(),
            });
        }
        if weight_kg <= Decimal::ZERO {
            return Err(CalculationError::NonPositiveInput {
                calculation: "BMI",
                parameter: "weight_kg",
                value: weight_kg.to_string(),
            });
        }
        Ok(Self::calculate(weight_kg, height_cm))
    }

    /// Categorize a raw BMI value and round it for reporting
    pub fn classify(raw_bmi: Decimal) -> BmiResult {
        let value = raw_bmi.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let category = BmiCategory::from_bmi(raw_bmi);

        BmiResult {
            value,
            category,
            display_color: category.display_color().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normal_bmi() {
        let result = BmiCalculator::calculate(dec!(65), dec!(170));
        assert_eq!(result.value, dec!(22.49));
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.display_color, "#4CAF50");
    }

    #[test]
    fn test_obese_bmi() {
        let result = BmiCalculator::calculate(dec!(95), dec!(170));
        assert_eq!(result.value, dec!(32.87));
        assert_eq!(result.category, BmiCategory::Obese);
        assert_eq!(result.display_color, "#F44336");
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(dec!(18.49)), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(dec!(18.50)), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(dec!(24.99)), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(dec!(25.00)), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(dec!(29.99)), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(dec!(30.00)), BmiCategory::Obese);
    }

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(BmiCalculator::classify(dec!(22.495)).value, dec!(22.50));
        assert_eq!(BmiCalculator::classify(dec!(22.4949)).value, dec!(22.49));
    }

    #[test]
    fn test_category_uses_unrounded_value() {
        // 56 kg at 174 cm is 18.4965..., reported as 18.50
        let result = BmiCalculator::calculate(dec!(56), dec!(174));
        assert_eq!(result.value, dec!(18.50));
        assert_eq!(result.category, BmiCategory::Underweight);
        assert_eq!(result.display_color, "#FFA500");

        // 73 kg at 156 cm is 29.9967..., reported as 30.00
        let result = BmiCalculator::calculate(dec!(73), dec!(156));
        assert_eq!(result.value, dec!(30.00));
        assert_eq!(result.category, BmiCategory::Overweight);

        // 57 kg at 151 cm is 24.9989..., reported as 25.00
        let result = BmiCalculator::calculate(dec!(57), dec!(151));
        assert_eq!(result.value, dec!(25.00));
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_exact_boundary_inputs() {
        // 100 kg at 200 cm is exactly 25.0
        let result = BmiCalculator::calculate(dec!(100), dec!(200));
        assert_eq!(result.value, dec!(25));
        assert_eq!(result.category, BmiCategory::Overweight);

        // 120 kg at 200 cm is exactly 30.0
        let result = BmiCalculator::calculate(dec!(120), dec!(200));
        assert_eq!(result.category, BmiCategory::Obese);
    }

    #[test]
    fn test_try_calculate_rejects_zero_height() {
        let err = BmiCalculator::try_calculate(dec!(70), dec!(0)).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::NonPositiveInput { parameter: "height_cm", .. }
        ));
        assert!(BmiCalculator::try_calculate(dec!(0), dec!(170)).is_err());
        assert!(BmiCalculator::try_calculate(dec!(70), dec!(175)).is_ok());
    }

    proptest! {
        #[test]
        fn test_category_matches_band(
            weight in 1u32..400u32,
            height in 50u32..260u32
        ) {
            let height_m = Decimal::from(height) / dec!(100);
            let raw = Decimal::from(weight) / (height_m * height_m);
            let result = BmiCalculator::calculate(Decimal::from(weight), Decimal::from(height));

            prop_assert!(result.value > Decimal::ZERO);
            prop_assert!(result.value.scale() <= 2);

            let expected = if raw < dec!(18.5) {
                BmiCategory::Underweight
            } else if raw < dec!(25) {
                BmiCategory::Normal
            } else if raw < dec!(30) {
                BmiCategory::Overweight
            } else {
                BmiCategory::Obese
            };
            prop_assert_eq!(result.category, expected);
            prop_assert_eq!(result.display_color.as_str(), expected.display_color());
        }
    }
}
