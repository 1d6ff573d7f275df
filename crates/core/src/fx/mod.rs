//! FX (Foreign Exchange) module - currency catalog, amount parsing, and conversion.

pub mod amount;
pub mod currency;
mod fx_model;
mod fx_service;
mod fx_traits;

pub use amount::{is_valid_amount_input, parse_amount};
pub use currency::{find_currency, search_currencies, Currency, ALL_CURRENCIES, POPULAR_CURRENCIES};
pub use fx_model::{Conversion, CurrencyPair, CONVERTED_AMOUNT_DECIMALS};
pub use fx_service::FxService;
pub use fx_traits::FxServiceTrait;
