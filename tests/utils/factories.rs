use zapcheck_lib::modules::validation::{E164Validator, ValidationRecord};

/// Build a pending record, computing format validity the same way the
/// import path does.
pub fn record(number: &str) -> ValidationRecord {
    let validator = E164Validator::new();
    ValidationRecord::new(number.to_string(), validator.is_valid(number))
}

pub fn records(numbers: &[&str]) -> Vec<ValidationRecord> {
    numbers.iter().map(|n| record(n)).collect()
}

/// Generate `count` distinct format-valid numbers.
pub fn valid_numbers(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("+55119990{:05}", i)).collect()
}
