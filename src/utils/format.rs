//! Display formatting helpers

/// Format a count with comma thousands separators (`1234567` -> `1,234,567`)
pub fn number_with_commas(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"N pairs with group"` message for the full corpus size
pub fn pairs_with_group_message(count: usize) -> String {
    format!("{} pairs with group", number_with_commas(count))
}

/// `"N pairs between groups"` message for the filtered size
pub fn pairs_between_groups_message(count: usize) -> String {
    format!("{} pairs between groups", number_with_commas(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_with_commas() {
        assert_eq!(number_with_commas(0), "0");
        assert_eq!(number_with_commas(999), "999");
        assert_eq!(number_with_commas(1000), "1,000");
        assert_eq!(number_with_commas(1234567), "1,234,567");
    }

    #[test]
    fn test_pair_messages() {
        assert_eq!(pairs_with_group_message(12345), "12,345 pairs with group");
        assert_eq!(pairs_between_groups_message(2), "2 pairs between groups");
    }
}
