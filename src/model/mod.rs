mod api_error;
pub use api_error::ApiError;
mod currency_exchange;
pub use currency_exchange::CurrencyExchange;
