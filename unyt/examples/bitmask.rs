//! Integer-backed units keep the full bitwise operator family.

use unyt::{unit, Quantity};

unit! {
    /// Interrupt status register contents.
    pub struct IrqStatus(u32, "irq");
}

const RX_READY: u32 = 1 << 0;
const TX_EMPTY: u32 = 1 << 1;
const OVERRUN: u32 = 1 << 3;

fn main() {
    let status = Quantity::<IrqStatus>::new(RX_READY | OVERRUN);

    // Masking and testing individual bits.
    assert_eq!((status & RX_READY).value(), RX_READY);
    assert_eq!((status & TX_EMPTY).value(), 0);

    // Setting and clearing bits.
    let with_tx = status | TX_EMPTY;
    assert_eq!(with_tx.value(), RX_READY | TX_EMPTY | OVERRUN);

    let cleared = with_tx & !OVERRUN;
    assert_eq!(cleared.value(), RX_READY | TX_EMPTY);

    // Shifts work too.
    let shifted = status << 4;
    assert_eq!(shifted.value(), (RX_READY | OVERRUN) << 4);

    println!("status: {:?}", status);
    println!("after set/clear: {:?}", cleared);
}
