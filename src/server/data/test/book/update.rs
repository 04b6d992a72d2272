use super::*;

fn update_params(id: i32) -> UpdateBookParams {
    UpdateBookParams {
        id,
        title: "Dune (Deluxe Edition)".to_string(),
        authors: "Frank Herbert, Brian Herbert".to_string(),
        isbn: "9780593099322".to_string(),
        imageurl: "https://books.example.com/dune-deluxe.jpg".to_string(),
        description: "Anniversary edition.".to_string(),
        bookshelf: "Science Fiction".to_string(),
    }
}

/// Tests overwriting every editable field of a book.
///
/// Expected: Ok(()) and the row reflects the new values
#[tokio::test]
async fn overwrites_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let id = repo.create(create_params("Dune")).await?;

    let params = update_params(id);
    repo.update(params.clone()).await?;

    let book = repo.get_by_id(id).await?.unwrap();
    assert_eq!(book.id, id);
    assert_eq!(book.title, params.title);
    assert_eq!(book.authors, params.authors);
    assert_eq!(book.isbn, params.isbn);
    assert_eq!(book.imageurl, params.imageurl);
    assert_eq!(book.description, params.description);
    assert_eq!(book.bookshelf, params.bookshelf);

    Ok(())
}

/// Tests that repeating the same update leaves the same final row.
///
/// Expected: identical rows after the first and second update
#[tokio::test]
async fn repeated_update_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let id = repo.create(create_params("Dune")).await?;

    repo.update(update_params(id)).await?;
    let after_first = repo.get_by_id(id).await?;

    repo.update(update_params(id)).await?;
    let after_second = repo.get_by_id(id).await?;

    assert!(after_first.is_some());
    assert_eq!(after_first, after_second);

    Ok(())
}

/// Tests that updating one book leaves the others untouched.
///
/// Expected: only the targeted row changes
#[tokio::test]
async fn only_updates_matching_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::book::create_book(db).await?;

    let repo = BookRepository::new(db);
    let id = repo.create(create_params("Dune")).await?;
    repo.update(update_params(id)).await?;

    assert_eq!(repo.get_by_id(other.id).await?, Some(other));

    Ok(())
}

/// Tests updating an ID with no matching row.
///
/// Verifies that zero affected rows is not distinguished from success.
///
/// Expected: Ok(()) and the catalog stays empty
#[tokio::test]
async fn updating_missing_book_is_not_an_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let result = repo.update(update_params(42)).await;

    assert!(result.is_ok());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
