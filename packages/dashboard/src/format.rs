//! Number and label formatting shared by the chart adapters.

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Two-significant-digit SI abbreviation (`1.2k`, `35M`, `4.0B`).
///
/// Billions are written with `B` rather than the SI `G`.
#[must_use]
pub fn abbreviate(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value:.1}");
    }

    let scientific = format!("{:.1e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value}");
    };

    let digits = mantissa.replace('.', "");
    let group = exponent.div_euclid(3).clamp(-8, 8);
    let integer_digits = exponent - group * 3 + 1;

    let number = match integer_digits {
        1 => format!("{}.{}", &digits[..1], &digits[1..]),
        2 => digits,
        _ => format!("{digits}0"),
    };

    let prefix = usize::try_from(group + 8)
        .ok()
        .and_then(|i| SI_PREFIXES.get(i))
        .copied()
        .unwrap_or_default();
    let prefix = if prefix == "G" { "B" } else { prefix };
    let sign = if value < 0.0 { "-" } else { "" };

    format!("{sign}{number}{prefix}")
}

/// Groups the integer part in thousands and keeps at most three
/// fractional digits, without trailing zeros (`1,234.5`).
#[must_use]
pub fn thousands(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((&fixed, ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_digits(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// A count grouped in thousands (`12,345`).
#[must_use]
pub fn count(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Dollar amount with thousands grouping.
#[must_use]
pub fn dollars(value: f64) -> String {
    format!("${}", thousands(value))
}

/// Dollar amount with exactly two decimals.
#[must_use]
pub fn dollars_fixed(value: f64) -> String {
    format!("${value:.2}")
}

/// Share of a whole as a percentage with one decimal (`42.5%`).
#[must_use]
pub fn percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

/// Uppercases the first character.
#[must_use]
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviates_with_two_significant_digits() {
        assert_eq!(abbreviate(0.0), "0.0");
        assert_eq!(abbreviate(5.0), "5.0");
        assert_eq!(abbreviate(150.0), "150");
        assert_eq!(abbreviate(1234.0), "1.2k");
        assert_eq!(abbreviate(12_000.0), "12k");
        assert_eq!(abbreviate(250_000.0), "250k");
        assert_eq!(abbreviate(1_500_000.0), "1.5M");
        assert_eq!(abbreviate(999_500.0), "1.0M");
    }

    #[test]
    fn billions_use_b() {
        assert_eq!(abbreviate(3_400_000_000.0), "3.4B");
        assert_eq!(abbreviate(45_000_000_000.0), "45B");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.0), "999");
        assert_eq!(thousands(1234.5), "1,234.5");
        assert_eq!(thousands(1_234_567.891_23), "1,234,567.891");
        assert_eq!(thousands(-1000.0), "-1,000");
        assert_eq!(count(12_345), "12,345");
        assert_eq!(count(7), "7");
    }

    #[test]
    fn money_and_percent() {
        assert_eq!(dollars(2500.0), "$2,500");
        assert_eq!(dollars_fixed(81.333), "$81.33");
        assert_eq!(percent(0.4251), "42.5%");
    }

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize("france"), "France");
        assert_eq!(capitalize("united kingdom"), "United kingdom");
        assert_eq!(capitalize(""), "");
    }
}
