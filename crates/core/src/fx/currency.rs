//! Currency catalog used by the currency pickers.

use serde::Serialize;

/// Display metadata for a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

const fn currency(code: &'static str, name: &'static str, symbol: &'static str) -> Currency {
    Currency { code, name, symbol }
}

/// Currencies shown at the top of the pickers. The first two are the
/// default "from" and "to" selections.
pub const POPULAR_CURRENCIES: &[Currency] = &[
    currency("USD", "US Dollar", "$"),
    currency("EUR", "Euro", "€"),
    currency("GBP", "British Pound", "£"),
    currency("JPY", "Japanese Yen", "¥"),
    currency("CHF", "Swiss Franc", "CHF"),
    currency("CAD", "Canadian Dollar", "C$"),
    currency("AUD", "Australian Dollar", "A$"),
    currency("CNY", "Chinese Yuan", "¥"),
];

/// Every currency offered in the pickers, popular ones included.
pub const ALL_CURRENCIES: &[Currency] = &[
    currency("USD", "US Dollar", "$"),
    currency("EUR", "Euro", "€"),
    currency("GBP", "British Pound", "£"),
    currency("JPY", "Japanese Yen", "¥"),
    currency("CHF", "Swiss Franc", "CHF"),
    currency("CAD", "Canadian Dollar", "C$"),
    currency("AUD", "Australian Dollar", "A$"),
    currency("CNY", "Chinese Yuan", "¥"),
    currency("NZD", "New Zealand Dollar", "NZ$"),
    currency("SEK", "Swedish Krona", "kr"),
    currency("NOK", "Norwegian Krone", "kr"),
    currency("DKK", "Danish Krone", "kr"),
    currency("PLN", "Polish Zloty", "zł"),
    currency("CZK", "Czech Koruna", "Kč"),
    currency("HUF", "Hungarian Forint", "Ft"),
    currency("RON", "Romanian Leu", "lei"),
    currency("TRY", "Turkish Lira", "₺"),
    currency("INR", "Indian Rupee", "₹"),
    currency("HKD", "Hong Kong Dollar", "HK$"),
    currency("SGD", "Singapore Dollar", "S$"),
    currency("KRW", "South Korean Won", "₩"),
    currency("MXN", "Mexican Peso", "MX$"),
    currency("BRL", "Brazilian Real", "R$"),
    currency("ZAR", "South African Rand", "R"),
    currency("ILS", "Israeli New Shekel", "₪"),
    currency("THB", "Thai Baht", "฿"),
    currency("AED", "UAE Dirham", "د.إ"),
    currency("SAR", "Saudi Riyal", "﷼"),
    currency("EGP", "Egyptian Pound", "E£"),
    currency("NGN", "Nigerian Naira", "₦"),
];

/// Look up a currency by code (case-insensitive).
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    ALL_CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

/// Currencies whose code or name contains `query` (case-insensitive),
/// in catalog order. An empty query matches everything.
pub fn search_currencies(query: &str) -> Vec<&'static Currency> {
    let needle = query.trim().to_lowercase();
    ALL_CURRENCIES
        .iter()
        .filter(|c| {
            c.code.to_lowercase().contains(&needle) || c.name.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_codes_are_unique_and_valid() {
        let mut seen = HashSet::new();
        for c in ALL_CURRENCIES {
            assert_eq!(c.code.len(), 3);
            assert!(c.code.chars().all(|ch| ch.is_ascii_uppercase()));
            assert!(seen.insert(c.code), "duplicate code {}", c.code);
        }
    }

    #[test]
    fn test_popular_currencies_are_in_catalog() {
        for c in POPULAR_CURRENCIES {
            assert_eq!(find_currency(c.code), Some(c));
        }
        assert_eq!(POPULAR_CURRENCIES[0].code, "USD");
        assert_eq!(POPULAR_CURRENCIES[1].code, "EUR");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find_currency("gbp").map(|c| c.name), Some("British Pound"));
        assert!(find_currency("XXX").is_none());
    }

    #[test]
    fn test_search_matches_code_or_name() {
        let codes: Vec<&str> = search_currencies("dollar").iter().map(|c| c.code).collect();
        assert!(codes.contains(&"USD"));
        assert!(codes.contains(&"HKD"));
        assert!(!codes.contains(&"EUR"));

        let codes: Vec<&str> = search_currencies("chf").iter().map(|c| c.code).collect();
        assert_eq!(codes, vec!["CHF"]);

        assert_eq!(search_currencies("").len(), ALL_CURRENCIES.len());
    }
}
