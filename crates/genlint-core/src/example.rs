//! Example generic-parameter lists for diagnostic text

const ASCII_A_OFFSET: u8 = b'A';

/// Letter used for the generic at `index`, cycling A-Z
fn letter_of_alphabet(index: usize) -> char {
    (ASCII_A_OFFSET + (index % 26) as u8) as char
}

/// Produce a plausible generics list for a diagnostic suggestion
///
/// A single generic renders as `SomeType`; more render as
/// `TypeA, TypeB, ...`. Past 26 the letters wrap around rather than
/// erroring; nobody configures that many, but the text stays valid.
pub fn example_generics(count: usize) -> String {
    if count == 1 {
        return "SomeType".to_string();
    }
    let values: Vec<String> = (0..count)
        .map(|index| format!("Type{}", letter_of_alphabet(index)))
        .collect();
    values.join(", ")
}
