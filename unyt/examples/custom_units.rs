//! Defining project-specific units, conversions, and constructor transforms.

use unyt::{convert, convert_fn, unit, Quantity};

fn clamp_to_duty(raw: u16) -> u16 {
    if raw > 1_000 {
        1_000
    } else {
        raw
    }
}

unit! {
    /// PWM duty cycle in tenths of a percent, clamped to [0, 1000].
    pub struct Duty(u16, "0.1%", init = clamp_to_duty);
}

unit! {
    /// Raw timer compare register value.
    pub struct Compare(u16, "cmp");
}

// The timer counts to 8000 per period, so 1000 duty steps map to 8 counts each.
convert!(Duty => Compare, 8);

convert_fn! {
    /// Same mapping for the half-speed timer bank.
    pub fn duty_to_slow_compare: Duty => Compare, 4;
}

fn main() {
    // The constructor transform clamps out-of-range requests.
    let duty = Quantity::<Duty>::new(1_250);
    assert_eq!(duty.value(), 1_000);

    let cmp: Quantity<Compare> = duty.to();
    assert_eq!(cmp.value(), 8_000);
    println!("{} -> {}", duty, cmp);

    // A second, named conversion between the same pair.
    let slow = duty_to_slow_compare(Quantity::<Duty>::new(500));
    assert_eq!(slow.value(), 2_000);
    println!("half-speed bank: {}", slow);

    // from_raw bypasses the transform for values already in range.
    let restored = Quantity::<Duty>::from_raw(750);
    assert_eq!(restored.value(), 750);
}
