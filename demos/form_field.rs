//! Demonstrates rescue strategies for fallible predicates.
//!
//! Run with: cargo run --example form_field

use rite::{define_validator, Error, Rescue, Validate};

fn main() {
    // A predicate that can itself fail: the field must parse as a number
    // before the range check even applies.
    let quantity = define_validator(|v| {
        v.try_validate(|raw: &str, _: &()| {
            let n: u32 = raw.trim().parse().map_err(Error::predicate)?;
            Ok((1..=99).contains(&n))
        })
        .message("%value is not an accepted quantity");
    });

    // Default strategy: the parse error escapes is_valid untouched.
    match quantity.is_valid("three", &()) {
        Ok(valid) => println!("valid? {}", valid),
        Err(e) => println!("reraised: {}", e),
    }

    // Ignoring: a field that does not even parse is simply invalid.
    let lenient = define_validator(|v| {
        v.try_validate(|raw: &str, _: &()| {
            let n: u32 = raw.trim().parse().map_err(Error::predicate)?;
            Ok((1..=99).contains(&n))
        })
        .rescue_with(Rescue::Ignoring);
    });
    println!("lenient valid? {}", lenient.is_valid("three", &()).unwrap());

    // Wrapping: surface the parse failure as a validation error.
    let strict = define_validator(|v| {
        v.try_validate(|raw: &str, _: &()| {
            let n: u32 = raw.trim().parse().map_err(Error::predicate)?;
            Ok((1..=99).contains(&n))
        })
        .rescue_with(Rescue::Wrapping);
    });
    match strict.is_valid("three", &()) {
        Err(e) => println!("wrapped: {}", e),
        Ok(valid) => println!("valid? {}", valid),
    }
}
