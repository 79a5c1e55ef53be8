//! Digit-sum reduction of a word number.

use lexarithmos_core::constants::REDUCTION_THRESHOLD;

/// Sum of the decimal digits of `value`.
pub fn digit_sum(mut value: u64) -> u64 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

/// `[value, digit_sum(value), …]`, reducing while the current value has more than one digit.
pub fn reduction_chain(value: u64) -> Vec<u64> {
    let mut chain = vec![value];
    let mut current = value;
    while current >= REDUCTION_THRESHOLD {
        current = digit_sum(current);
        chain.push(current);
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_sum_of_small_and_large_values() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(353), 11);
        assert_eq!(digit_sum(u64::MAX), 87);
    }

    #[test]
    fn chain_stops_at_a_single_digit() {
        assert_eq!(reduction_chain(353), vec![353, 11, 2]);
        assert_eq!(reduction_chain(9999), vec![9999, 36, 9]);
        assert_eq!(reduction_chain(10), vec![10, 1]);
        assert_eq!(reduction_chain(7), vec![7]);
    }
}
