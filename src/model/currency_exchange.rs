use rocket::serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct CurrencyExchange {
    pub from: String,
    pub to: String,
    #[serde(rename = "conversionMultiple")]
    pub conversion_multiple: i64,
}
