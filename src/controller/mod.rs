pub mod currency_exchange;
