//! Serializing and deserializing quantities with serde.
//!
//! Plain quantity fields serialize as their SI value. Fields using `siqty::serde_with_unit` carry the unit symbol
//! and accept any registered symbol when read back.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use siqty::{Current, ElectricCharge, Energy, Length, Time, Voltage};
    use serde::{Deserialize, Serialize};

    println!("=== Quantity Serialization Examples ===\n");

    // 1. Bare SI values
    println!("1. Basic JSON Serialization:");
    let distance = Length::from_kilometres(1.5);
    let json = serde_json::to_string(&distance).unwrap();
    println!("   Distance: {} → JSON: {}", distance, json);

    let restored: Length = serde_json::from_str(&json).unwrap();
    println!("   JSON: {} → {}", json, restored);
    println!();

    // 2. Structs mixing both encodings
    #[derive(Serialize, Deserialize, Debug)]
    struct Battery {
        #[serde(with = "siqty::serde_with_unit")]
        capacity: ElectricCharge,
        #[serde(with = "siqty::serde_with_unit")]
        nominal_voltage: Voltage,
        max_discharge: Current,
    }

    println!("2. Serializing Structs with Quantities:");
    let battery = Battery {
        capacity: ElectricCharge::from_milliampere_hours(3000.0),
        nominal_voltage: Voltage::from_volts(3.7),
        max_discharge: Current::from_amperes(10.0),
    };
    let json = serde_json::to_string_pretty(&battery).unwrap();
    println!("{}", json);
    println!();

    // 3. Hand-written input in non-SI units
    println!("3. Reading Non-SI Units:");
    let input = r#"{
        "capacity": {"value": 2.5, "unit": "A⋅h"},
        "nominal_voltage": {"value": 3600, "unit": "mV"},
        "max_discharge": 5.0
    }"#;
    let battery: Battery = serde_json::from_str(input).unwrap();
    let energy: Energy = battery.capacity * battery.nominal_voltage;
    let runtime: Time = battery.capacity / battery.max_discharge;
    println!("   {:?}", battery);
    println!("   Stored energy: {:.1}", energy.display_in(siqty::EnergyUnit::WATT_HOURS));
    println!("   Runtime at max discharge: {:.0}", runtime.display_in(siqty::TimeUnit::MINUTES));
    println!();

    // 4. Unknown symbols are rejected
    println!("4. Unknown Units:");
    let bad = r#"{"capacity": {"value": 1, "unit": "Ah?"}, "nominal_voltage": {"value": 3.7}, "max_discharge": 1}"#;
    match serde_json::from_str::<Battery>(bad) {
        Ok(_) => println!("   unexpectedly accepted"),
        Err(err) => println!("   rejected: {}", err),
    }
    println!();

    println!("=== Important Notes ===");
    println!("• Plain fields serialize as the bare SI value");
    println!("• serde_with_unit fields write the SI symbol and accept any registered symbol");
    println!("• A missing unit field is read as SI");
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
