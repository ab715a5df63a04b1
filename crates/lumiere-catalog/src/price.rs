//! Display-price handling.
//!
//! Catalog prices are stored exactly as shown to shoppers (`"$12,500"`).
//! Ordering uses [`digits_value`], which keeps every ASCII digit and drops
//! everything else. [`parse_price`] is the strict reading used to validate
//! catalog data, so malformed strings are caught before they reach a sort.

use crate::CatalogError;

/// Numeric value of a display price: all digits concatenated, in order.
///
/// A string with no digits is worth 0. Values too large for `u64`
/// saturate at `u64::MAX`.
///
/// ```
/// use lumiere_catalog::price::digits_value;
/// assert_eq!(digits_value("$1,200"), 1200);
/// assert_eq!(digits_value("Price on request"), 0);
/// ```
pub fn digits_value(price: &str) -> u64 {
    price
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        })
}

/// Strictly parse a whole-currency display price such as `"$3,000"`.
///
/// Accepts an optional non-digit prefix (the currency symbol), then one
/// run of digits with optional `,` thousands separators between groups of
/// three. Anything after the amount is rejected.
pub fn parse_price(price: &str) -> Result<u64, CatalogError> {
    let invalid = |reason| CatalogError::InvalidPrice {
        price: price.to_string(),
        reason,
    };

    let trimmed = price.trim();
    let start = trimmed
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| invalid("no digits"))?;
    let prefix = &trimmed[..start];
    if prefix.contains([',', '.']) {
        return Err(invalid("separator before amount"));
    }

    let amount = &trimmed[start..];
    let groups: Vec<&str> = amount.split(',').collect();
    for (i, group) in groups.iter().enumerate() {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("amount must be one digit run"));
        }
        if i > 0 && group.len() != 3 {
            return Err(invalid("thousands groups must have three digits"));
        }
        if i == 0 && groups.len() > 1 && group.len() > 3 {
            return Err(invalid("thousands groups must have three digits"));
        }
    }

    groups
        .concat()
        .parse::<u64>()
        .map_err(|_| invalid("amount out of range"))
}

/// Format whole-currency units as a US dollar display price.
///
/// ```
/// use lumiere_catalog::price::format_price;
/// assert_eq!(format_price(12500), "$12,500");
/// ```
pub fn format_price(units: u64) -> String {
    let digits = units.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_value_strips_symbols() {
        assert_eq!(digits_value("$1,200"), 1200);
        assert_eq!(digits_value("$300"), 300);
        assert_eq!(digits_value("$3,000"), 3000);
    }

    #[test]
    fn test_digits_value_no_digits_is_zero() {
        assert_eq!(digits_value(""), 0);
        assert_eq!(digits_value("Price on request"), 0);
    }

    #[test]
    fn test_digits_value_concatenates_groups() {
        // Ranges and decimals collapse into one number.
        assert_eq!(digits_value("$1,200 - $1,500"), 12001500);
        assert_eq!(digits_value("$49.99"), 4999);
    }

    #[test]
    fn test_digits_value_saturates() {
        assert_eq!(digits_value("$99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn test_parse_price_accepts_catalog_format() {
        assert_eq!(parse_price("$12,500").unwrap(), 12500);
        assert_eq!(parse_price("$850").unwrap(), 850);
        assert_eq!(parse_price("$1,250,000").unwrap(), 1_250_000);
    }

    #[test]
    fn test_parse_price_rejects_malformed() {
        assert!(parse_price("Price on request").is_err());
        assert!(parse_price("$1,200 - $1,500").is_err());
        assert!(parse_price("$49.99").is_err());
        assert!(parse_price("$12,50").is_err());
        assert!(parse_price("$1200,000").is_err());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(1000), "$1,000");
        assert_eq!(format_price(1_250_000), "$1,250,000");
    }

    #[test]
    fn test_format_then_parse_agree() {
        for units in [5, 300, 1200, 45_000] {
            assert_eq!(parse_price(&format_price(units)).unwrap(), units);
        }
    }
}
