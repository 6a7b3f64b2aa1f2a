//! Minimal end-to-end example: build units from literals, compare across scales and convert.

use ratio_units::{unit, Centimeters, Degrees, Millimeters, Radians};

fn main() {
    let a = unit!(50 mm);
    let b = unit!(5 cm);
    assert!(a == b);

    let cm: Centimeters<f64> = unit!(12.3 mm).convert();
    assert!((cm.value() - 1.23).abs() < 1e-12);

    let r: Radians<f64> = Degrees::new(180.0_f64).convert();
    assert!((r.value() - core::f64::consts::PI).abs() < 1e-10);

    let truncated: Centimeters<i64> = Millimeters::new(41_i64).convert();
    assert_eq!(truncated.value(), 4);

    println!("{} == {}, {} -> {}", a, b, unit!(12.3 mm), cm);
}
