//! Serializing units with serde, in the compact and the suffixed form.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use ratio_units::{unit, CentiGray, Centimeters, Degrees, Millimeters};
    use serde::{Deserialize, Serialize};

    println!("=== Unit Serialization Examples ===\n");

    // Compact form: the raw payload
    println!("1. Compact form:");
    let aperture = unit!(12.5 mm);
    let json = serde_json::to_string(&aperture).unwrap();
    println!("   {} → JSON: {}", aperture, json);

    let restored: Millimeters<f64> = serde_json::from_str(&json).unwrap();
    println!("   JSON: {} → {}", json, restored);
    println!();

    // Suffixed form on selected fields
    #[derive(Serialize, Deserialize, Debug)]
    struct Beam {
        #[serde(with = "ratio_units::serde_with_unit")]
        field_size: Centimeters<f64>,
        #[serde(with = "ratio_units::serde_with_unit")]
        dose: CentiGray<i32>,
        gantry: Degrees<i32>,
    }

    println!("2. Struct with suffixed fields:");
    let beam = Beam {
        field_size: Centimeters::new(10.0),
        dose: CentiGray::new(180),
        gantry: Degrees::new(270),
    };
    let json = serde_json::to_string_pretty(&beam).unwrap();
    println!("{}", json);

    let restored: Beam = serde_json::from_str(&json).unwrap();
    println!("   Restored: {:?}", restored);
    println!();

    // Suffix validation
    println!("3. Suffix mismatch is rejected:");
    let wrong = r#"{"field_size":{"value":100.0,"unit":"mm"},"dose":{"value":180},"gantry":0}"#;
    match serde_json::from_str::<Beam>(wrong) {
        Ok(beam) => println!("   unexpected success: {:?}", beam),
        Err(err) => println!("   error: {}", err),
    }
    println!();

    println!("=== Notes ===");
    println!("• The compact form stores only the payload; the type decides the scale");
    println!("• serde_with_unit stores the suffix and checks it on the way back");
    println!("• No rescaling happens during deserialization");
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
