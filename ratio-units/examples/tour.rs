//! Walkthrough of every operator on `Unit`, logging each step.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example tour
//! ```

use ratio_units::{
    literals, try_convert, unit, CentiGray, Centimeters, Degrees, Gray, Length, Meters, Millimeters, Radians,
    Ratio, Unit,
};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

type Inches<V> = Unit<V, Ratio<254, 100>, Length>;

fn main() {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    info!("Conversions");
    let a = unit!(12.3 mm);
    let cm: Centimeters<f64> = a.convert();
    let back: Millimeters<f64> = cm.convert();
    info!(%a, %cm, %back, "mm -> cm -> mm");

    let deg = unit!(90 deg);
    let rad: Radians<f64> = deg.convert();
    info!(%deg, %rad, "degrees to radians");

    let inches: Inches<f64> = Meters::new(1.0_f64).convert();
    debug!(value = inches.value(), "one metre in inches (anonymous scale, no suffix)");

    info!("Comparison");
    info!(equal = unit!(50 mm) == unit!(5 cm), "50 mm == 5 cm");
    info!(equal = unit!(41 mm) == unit!(4 cm), "41 mm == 4 cm");
    info!(less = unit!(99 mm) < unit!(10 cm), "99 mm < 10 cm");

    info!("Arithmetic");
    let sum = unit!(5.0 mm) + unit!(10 mm);
    info!(%sum, "5.0 mm + 10 mm promotes to f64");

    let mut total = unit!(15 mm);
    total += unit!(1 cm);
    info!(%total, as_cm = total == unit!(2.5 cm), "15 mm += 1 cm");

    let ratio = unit!(14 cm) / unit!(70 mm);
    let scaled = unit!(14 cm) / 7.0_f64;
    info!(ratio, %scaled, "unit / unit and unit / scalar");

    let negated = -Centimeters::new(2.14_f64);
    info!(%negated, "negation");

    info!("Dose");
    let fractions: CentiGray<i32> = (0..25).map(|_| literals::cGy(180_i32)).sum();
    let prescribed: Gray<i32> = fractions.convert();
    info!(%fractions, %prescribed, "25 fractions of 180 cGy");

    info!("Checked conversion");
    match try_convert::<Millimeters<u8>>(Meters::new(1_i32)) {
        Ok(mm) => info!(%mm, "fits"),
        Err(err) => warn!(%err, "1 m does not fit in u8 millimetres"),
    }

    let angle = Degrees::new(30_i16).cast::<f32>();
    debug!(%angle, "payload cast keeps the scale");
}
