use crate::server::{
    data::book::BookRepository,
    model::book::{CreateBookParams, UpdateBookParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod get_by_id;
mod update;

fn create_params(title: &str) -> CreateBookParams {
    CreateBookParams {
        title: title.to_string(),
        authors: "Frank Herbert".to_string(),
        isbn: "9780441172719".to_string(),
        imageurl: "https://books.example.com/dune.jpg".to_string(),
        description: "Spice and sandworms.".to_string(),
    }
}
