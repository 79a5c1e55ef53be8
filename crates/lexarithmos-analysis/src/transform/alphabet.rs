//! Greek isopsephy letter values.

/// Numeric value of an uppercase Greek letter, or `None` for anything else.
///
/// The archaic letters (stigma, koppa, sampi) are not part of the table.
pub fn letter_value(letter: char) -> Option<u64> {
    let value = match letter {
        'Α' => 1,
        'Β' => 2,
        'Γ' => 3,
        'Δ' => 4,
        'Ε' => 5,
        'Ζ' => 7,
        'Η' => 8,
        'Θ' => 9,
        'Ι' => 10,
        'Κ' => 20,
        'Λ' => 30,
        'Μ' => 40,
        'Ν' => 50,
        'Ξ' => 60,
        'Ο' => 70,
        'Π' => 80,
        'Ρ' => 100,
        'Σ' => 200,
        'Τ' => 300,
        'Υ' => 400,
        'Φ' => 500,
        'Χ' => 600,
        'Ψ' => 700,
        'Ω' => 800,
        _ => return None,
    };
    Some(value)
}
