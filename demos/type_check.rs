//! Demonstrates validators with extra arguments.
//!
//! Run with: cargo run --example type_check

use rite::{define_validator, Validate};

fn main() {
    // The second parameter carries the range the value must fall in.
    let within = define_validator(|v| {
        v.validate(|value: &i32, range: &(i32, i32)| (range.0..=range.1).contains(value))
            .message_with(|value, range| {
                format!("{} expected to be between {} and {}", value, range.0, range.1)
            });
    });

    let percent = (0, 100);
    for candidate in [42, 150, -7] {
        match within.ensure(&candidate, &percent) {
            Ok(()) => println!("{} is a valid percentage", candidate),
            Err(e) => println!("rejected: {}", e),
        }
    }

    // is_valid reports the same outcome without erring on failure.
    println!("42 valid? {}", within.is_valid(&42, &percent).unwrap());
    println!("150 valid? {}", within.is_valid(&150, &percent).unwrap());
}
