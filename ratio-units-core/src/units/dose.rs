//! Absorbed dose units.
//!
//! The base scale for this category is [`GrayScale`]; a centigray is `1/100 Gy`.

use crate::Category;
use ratio_units_macros::Scale;

/// Category tag for absorbed radiation dose.
pub enum Dose {}
impl Category for Dose {
    const NAME: &'static str = "dose";
}

/// Gray (base scale).
#[derive(Debug, Scale)]
#[scale(ratio = 1, category = Dose, suffix = "Gy", alias = Gray)]
pub enum GrayScale {}

/// Centigray (`1/100 Gy`).
#[derive(Debug, Scale)]
#[scale(ratio = 1 / 100, category = Dose, suffix = "cGy", alias = CentiGray)]
pub enum CentiGrayScale {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_to_centigray() {
        let cgy: CentiGray<i32> = Gray::new(2_i32).convert();
        assert_eq!(cgy.value(), 200);
        assert!(cgy == Gray::new(2_i32));
    }

    #[test]
    fn centigray_to_gray() {
        let gy: Gray<f64> = CentiGray::new(180_i64).convert();
        assert_eq!(gy.value(), 1.8);

        let gy: Gray<i64> = CentiGray::new(180_i64).convert();
        assert_eq!(gy.value(), 1);
    }

    #[test]
    fn fractionated_dose_sum() {
        let fractions = [CentiGray::new(180_i32); 25];
        let total: CentiGray<i32> = fractions.into_iter().sum();
        assert!(total == Gray::new(45_i32));
        assert_eq!(total.to_string(), "4500 [cGy]");
    }

    #[test]
    fn suffixes() {
        assert_eq!(Gray::<f64>::suffix(), "Gy");
        assert_eq!(CentiGray::<f64>::suffix(), "cGy");
    }
}
