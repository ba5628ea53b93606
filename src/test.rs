use crate::prepare;
use rocket::local::blocking::Client;

pub fn setup() -> Client {
    Client::untracked(prepare(rocket::build())).unwrap()
}
