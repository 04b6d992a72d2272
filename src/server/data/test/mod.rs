mod book;
mod book_search;
