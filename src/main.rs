#![allow(non_snake_case)]

mod client;
mod model;

fn main() {
    dioxus::launch(client::App);
}
