// Market currency helpers. Rates are static and GBP-based; refresh them by hand.

use serde::Serialize;

use crate::locale::registry::{LocaleError, LocaleInfo};

const EXCHANGE_RATES: [(&str, f64); 5] = [
    ("GBP", 1.0),
    ("USD", 1.27),
    ("AUD", 1.93),
    ("NZD", 2.08),
    ("EUR", 1.18),
];

fn rate(currency: &str) -> Result<f64, LocaleError> {
    EXCHANGE_RATES
        .iter()
        .find(|(code, _)| *code == currency)
        .map(|(_, rate)| *rate)
        .ok_or_else(|| LocaleError::UnknownCurrency(currency.to_string()))
}

/// Converts via GBP and rounds to whole units.
pub fn convert_currency(amount: f64, from: &str, to: &str) -> Result<i64, LocaleError> {
    let in_gbp = amount / rate(from)?;
    Ok((in_gbp * rate(to)?).round() as i64)
}

pub fn convert_from_gbp(amount: f64, locale: &LocaleInfo) -> Result<i64, LocaleError> {
    convert_currency(amount, "GBP", &locale.currency)
}

/// `£900-£1,500/day`. With `from_gbp` the bounds are converted first.
pub fn format_day_rate_range(
    min_rate: i64,
    max_rate: i64,
    locale: &LocaleInfo,
    from_gbp: bool,
) -> Result<String, LocaleError> {
    let (min, max) = if from_gbp {
        (
            convert_from_gbp(min_rate as f64, locale)?,
            convert_from_gbp(max_rate as f64, locale)?,
        )
    } else {
        (min_rate, max_rate)
    };
    let symbol = &locale.currency_symbol;
    Ok(format!(
        "{symbol}{}-{symbol}{}/day",
        group_thousands(min),
        group_thousands(max)
    ))
}

/// `£145,000`, or `£145K` / `$2M` in compact form. Amounts below 1,000
/// are never compacted.
pub fn format_currency(amount: i64, locale: &LocaleInfo, compact: bool) -> String {
    let symbol = &locale.currency_symbol;
    if !compact || amount.abs() < 1000 {
        return format!("{symbol}{}", group_thousands(amount));
    }
    let thousands = (amount as f64 / 1_000.0).round() as i64;
    if thousands.abs() < 1000 {
        format!("{symbol}{thousands}K")
    } else {
        let millions = (amount as f64 / 1_000_000.0).round() as i64;
        format!("{symbol}{}M", group_thousands(millions))
    }
}

/// Annual salary in full form. With `from_gbp` the amount is converted first.
pub fn format_salary(
    amount: i64,
    locale: &LocaleInfo,
    from_gbp: bool,
) -> Result<String, LocaleError> {
    let value = if from_gbp {
        convert_from_gbp(amount as f64, locale)?
    } else {
        amount
    };
    Ok(format_currency(value, locale, false))
}

/// Typical market figures for one executive role, in the market's currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleDefaults {
    pub role: &'static str,
    pub label: &'static str,
    pub avg_day_rate: i64,
    pub avg_salary: i64,
    pub min_day_rate: i64,
    pub max_day_rate: i64,
}

const FALLBACK_ROLE: &str = "cfo";

const fn role(
    role: &'static str,
    label: &'static str,
    avg_day_rate: i64,
    avg_salary: i64,
    min_day_rate: i64,
    max_day_rate: i64,
) -> RoleDefaults {
    RoleDefaults {
        role,
        label,
        avg_day_rate,
        avg_salary,
        min_day_rate,
        max_day_rate,
    }
}

const UK_ROLES: [RoleDefaults; 9] = [
    role("cmo", "CMO", 900, 130_000, 600, 1500),
    role("cfo", "CFO", 1000, 145_000, 750, 1500),
    role("cto", "CTO", 1050, 155_000, 850, 1600),
    role("coo", "COO", 950, 140_000, 750, 1400),
    role("ciso", "CISO", 1350, 165_000, 1000, 2000),
    role("chro", "CHRO", 900, 130_000, 650, 1400),
    role("cpo", "CPO", 950, 145_000, 800, 1400),
    role("ceo", "CEO", 1200, 180_000, 900, 1800),
    role("cco", "CCO", 900, 140_000, 700, 1300),
];

const US_ROLES: [RoleDefaults; 9] = [
    role("cmo", "CMO", 1400, 200_000, 1000, 2000),
    role("cfo", "CFO", 1500, 220_000, 1100, 2200),
    role("cto", "CTO", 1600, 240_000, 1200, 2400),
    role("coo", "COO", 1400, 210_000, 1000, 2000),
    role("ciso", "CISO", 1650, 230_000, 1250, 2300),
    role("chro", "CHRO", 1200, 185_000, 900, 1700),
    role("cpo", "CPO", 1450, 215_000, 1100, 2000),
    role("ceo", "CEO", 1800, 280_000, 1300, 2800),
    role("cco", "CCO", 1400, 200_000, 1100, 1800),
];

const AU_ROLES: [RoleDefaults; 9] = [
    role("cmo", "CMO", 1600, 220_000, 1200, 2400),
    role("cfo", "CFO", 1800, 250_000, 1400, 2600),
    role("cto", "CTO", 1900, 270_000, 1500, 2800),
    role("coo", "COO", 1600, 240_000, 1300, 2400),
    role("ciso", "CISO", 2000, 260_000, 1600, 2800),
    role("chro", "CHRO", 1400, 210_000, 1100, 2000),
    role("cpo", "CPO", 1700, 250_000, 1400, 2400),
    role("ceo", "CEO", 2100, 310_000, 1600, 3200),
    role("cco", "CCO", 1700, 240_000, 1400, 2100),
];

const NZ_ROLES: [RoleDefaults; 9] = [
    role("cmo", "CMO", 1500, 200_000, 1100, 2200),
    role("cfo", "CFO", 1700, 230_000, 1300, 2400),
    role("cto", "CTO", 1800, 250_000, 1400, 2600),
    role("coo", "COO", 1500, 220_000, 1200, 2200),
    role("ciso", "CISO", 1850, 240_000, 1500, 2600),
    role("chro", "CHRO", 1300, 190_000, 1000, 1800),
    role("cpo", "CPO", 1600, 230_000, 1300, 2200),
    role("ceo", "CEO", 1950, 290_000, 1500, 3000),
    role("cco", "CCO", 1600, 220_000, 1300, 1950),
];

fn roles_for(locale_code: &str) -> Option<&'static [RoleDefaults]> {
    match locale_code {
        "uk" => Some(&UK_ROLES),
        "us" => Some(&US_ROLES),
        "au" => Some(&AU_ROLES),
        "nz" => Some(&NZ_ROLES),
        _ => None,
    }
}

/// Market figures for `role` (case-insensitive). Unrecognised roles get the
/// CFO figures; a market without a rate table is an `InvalidLocale`.
pub fn role_defaults(locale: &LocaleInfo, role: &str) -> Result<RoleDefaults, LocaleError> {
    let roles = roles_for(&locale.code)
        .ok_or_else(|| LocaleError::InvalidLocale(locale.code.clone()))?;
    let wanted = role.trim().to_ascii_lowercase();
    roles
        .iter()
        .find(|r| r.role == wanted)
        .or_else(|| roles.iter().find(|r| r.role == FALLBACK_ROLE))
        .copied()
        .ok_or_else(|| {
            LocaleError::Configuration(format!("no {FALLBACK_ROLE} rates for '{}'", locale.code))
        })
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
