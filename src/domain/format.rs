//! Display formatting for prices and mileage.
//!
//! Prices are shown in the South Asian numbering scale used by the showroom:
//! amounts of one crore (10,000,000) and above in crores, one lac (100,000) and
//! above in lacs, anything smaller as a grouped integer.

/// One crore in the smallest currency unit.
const CRORE: u64 = 10_000_000;

/// One lac in the smallest currency unit.
const LAC: u64 = 100_000;

/// Formats a price for display.
///
/// # Examples
///
/// ```
/// use showroom::domain::format_price;
///
/// assert_eq!(format_price(15_500_000), "Rs. 1.6 Crore");
/// assert_eq!(format_price(1_150_000), "Rs. 11.5 Lac");
/// assert_eq!(format_price(99_999), "Rs. 99,999");
/// ```
#[must_use]
pub fn format_price(price: u64) -> String {
    if price >= CRORE {
        format!("Rs. {} Crore", one_decimal(price, CRORE))
    } else if price >= LAC {
        format!("Rs. {} Lac", one_decimal(price, LAC))
    } else {
        format!("Rs. {}", group_thousands(price))
    }
}

/// `amount / unit` with one decimal place, exact halves rounded up.
fn one_decimal(amount: u64, unit: u64) -> String {
    let unit = u128::from(unit);
    let tenths = (u128::from(amount) * 10 + unit / 2) / unit;
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Formats an odometer reading, e.g. `"12,500 KM"`.
#[must_use]
pub fn format_mileage(km: u32) -> String {
    format!("{} KM", group_thousands(u64::from(km)))
}

/// Inserts a comma between every group of three digits.
fn group_thousands(value: u64) -> String {
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
