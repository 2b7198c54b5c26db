//! Minimal end-to-end example: tag values with units, convert, and do arithmetic.

use unyt::{Milliseconds, Millivolts, Seconds, Volts};

fn main() {
    let v = Volts::new(10);
    let mv: Millivolts = v.to();
    assert_eq!(mv.value(), 10_000);
    println!("{} is {}", v, mv);

    // Same-unit arithmetic stays in the unit.
    let total = Millivolts::new(1_500) + Millivolts::new(250);
    assert_eq!(total.value(), 1_750);
    println!("sum: {}", total);

    // Integer down-conversion truncates, like integer division.
    let volts: Volts = Millivolts::new(5_999).to();
    assert_eq!(volts.value(), 5);
    println!("5999 mV rounds down to {}", volts);

    let deadline = Seconds::new(2);
    let deadline_ms: Milliseconds = deadline.to();
    println!("deadline: {} = {}", deadline, deadline_ms);
}
