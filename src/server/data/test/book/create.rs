use super::*;

/// Tests inserting a book and reading it back.
///
/// Verifies that every inserted field round-trips unchanged and that the
/// bookshelf takes the store default.
///
/// Expected: Ok(id) and a matching row with an empty bookshelf
#[tokio::test]
async fn creates_book_and_round_trips_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let params = create_params("Dune");
    let id = repo.create(params.clone()).await?;

    let book = repo.get_by_id(id).await?.expect("inserted book should exist");

    assert_eq!(book.id, id);
    assert_eq!(book.title, params.title);
    assert_eq!(book.authors, params.authors);
    assert_eq!(book.isbn, params.isbn);
    assert_eq!(book.imageurl, params.imageurl);
    assert_eq!(book.description, params.description);
    assert_eq!(book.bookshelf, "");

    Ok(())
}

/// Tests that each insert is assigned its own ID.
///
/// Expected: two distinct IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let first = repo.create(create_params("Dune")).await?;
    let second = repo.create(create_params("Dune Messiah")).await?;

    assert_ne!(first, second);

    Ok(())
}

/// Tests that input is bound as a parameter rather than spliced into SQL.
///
/// Expected: the quote-laden title is stored verbatim
#[tokio::test]
async fn stores_quotes_verbatim() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let title = "Robert'); DROP TABLE books;--";
    let id = repo.create(create_params(title)).await?;

    let book = repo.get_by_id(id).await?.unwrap();
    assert_eq!(book.title, title);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests inserting when the books table does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_books_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let result = repo.create(create_params("Dune")).await;

    assert!(result.is_err());

    Ok(())
}
