use crate::model::CurrencyExchange;
use rocket::{get, serde::json::Json};

#[get("/currencyExchange/from/<from>/to/<to>")]
pub fn get(from: &str, to: &str) -> Json<CurrencyExchange> {
    Json(CurrencyExchange {
        from: from.to_string(),
        to: to.to_string(),
        conversion_multiple: 80,
    })
}
