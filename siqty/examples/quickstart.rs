//! Minimal end-to-end example: build quantities in any unit, combine them across dimensions and print them.

use siqty::{Acceleration, AccelerationUnit, Force, Length, Mass, Speed, SpeedUnit, Time};

fn main() {
    let a = Acceleration::new(250.0, AccelerationUnit::CENTIMETRES_PER_SECOND_SQUARED);
    assert_eq!(a.metres_per_second_squared(), 2.5);

    let f: Force = Mass::from_kilograms(4.0) * a;
    println!("{} on 4 kg needs {}", a, f);

    let v: Speed = Length::from_kilometres(42.195) / Time::from_hours(2.0);
    println!(
        "marathon pace: {:.2}",
        v.display_in(SpeedUnit::KILOMETRES_PER_HOUR)
    );

    let parsed: Speed = "30 kn".parse().expect("knots are a registered speed unit");
    println!("{} is {:.1}", parsed.display_in(SpeedUnit::KNOTS), parsed);
}
