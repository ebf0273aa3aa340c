#[path = "../common/mod.rs"]
mod common;

mod category;
mod news;
