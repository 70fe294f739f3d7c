use tally_core::{Calculator, Key};

/// Helper function to feed a key sequence into a fresh calculator
pub fn calculator_after(keys: &str) -> Calculator {
    let mut calc = Calculator::new();
    press_all(&mut calc, keys);
    calc
}

/// Helper function to press every key of a sequence, ignoring recovered
/// errors the way an interactive session does
pub fn press_all(calc: &mut Calculator, keys: &str) {
    for key in Key::parse_sequence(keys).expect("Failed to parse key sequence") {
        let _ = calc.press(key);
    }
}
