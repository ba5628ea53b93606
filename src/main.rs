use crate::model::ApiError;
use anyhow::anyhow;
use rocket::{catch, catchers, http::Status, launch, routes, Build, Request, Rocket};
use tracing::info;

mod controller;
mod model;
#[cfg(test)]
mod test;

pub fn prepare(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket
        .mount("/", routes![controller::currency_exchange::get])
        .register("/", catchers![error])
}

#[catch(default)]
fn error(status: Status, req: &Request) -> ApiError {
    ApiError::new(status.code, anyhow!("Failed to handle URI {}", req.uri()))
}

#[launch]
fn rocket() -> _ {
    tracing_subscriber::fmt::init();
    info!("Starting currency exchange service");
    prepare(rocket::build())
}
