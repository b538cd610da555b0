//! The fixed candidate alphabet: 26 lowercase ASCII letters plus space.

/// Ordered alphabet the generator draws from. Defined once, never mutated.
pub const ALPHABET: &[u8; 27] = b"abcdefghijklmnopqrstuvwxyz ";

/// Whether `c` belongs to the candidate alphabet.
pub fn contains(c: char) -> bool {
    c == ' ' || c.is_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_27_distinct_symbols() {
        assert_eq!(ALPHABET.len(), 27);
        let mut sorted = ALPHABET.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 27);
    }

    #[test]
    fn membership_agrees_with_table() {
        for b in 0..=u8::MAX {
            let c = b as char;
            assert_eq!(contains(c), ALPHABET.contains(&b), "byte {b:#04x}");
        }
    }
}
