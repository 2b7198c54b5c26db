//! Example demonstrating the serde_with_unit helper module.
//!
//! This shows how to use #[serde(with = "unyt_core::serde_with_unit")] to preserve
//! unit information in serialized data on a per-field basis.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use serde::{Deserialize, Serialize};
    use unyt::{Milliseconds, Millivolts};

    #[derive(Serialize, Deserialize, Debug)]
    struct SensorReading {
        channel: u8,

        // Serializes as {"value": ..., "unit": "mV"} and validates the unit
        // on the way back in.
        #[serde(with = "unyt_core::serde_with_unit")]
        level: Millivolts,

        // Default serialization: the bare storage value.
        sampled_at: Milliseconds,
    }

    let reading = SensorReading {
        channel: 3,
        level: Millivolts::new(1_650),
        sampled_at: Milliseconds::new(120_034),
    };

    let json = serde_json::to_string_pretty(&reading).unwrap();
    println!("Serialized:\n{}\n", json);

    let restored: SensorReading = serde_json::from_str(&json).unwrap();
    println!("Deserialized: {:?}\n", restored);

    // Missing unit field is accepted for backwards compatibility.
    let no_unit = r#"{"channel": 3, "level": {"value": 900}, "sampled_at": 5}"#;
    let restored: SensorReading = serde_json::from_str(no_unit).unwrap();
    println!("Without unit field: {:?}\n", restored);

    // A mismatched unit symbol is rejected.
    let wrong_unit = r#"{"channel": 3, "level": {"value": 900, "unit": "ms"}, "sampled_at": 5}"#;
    match serde_json::from_str::<SensorReading>(wrong_unit) {
        Ok(_) => println!("unexpected success with wrong unit"),
        Err(e) => println!("rejected wrong unit: {}", e),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
