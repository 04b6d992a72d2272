use super::*;

/// Tests getting an existing book by ID.
///
/// Expected: Ok(Some(book))
#[tokio::test]
async fn gets_existing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::book::BookFactory::new(db)
        .title("Dune")
        .bookshelf("Science Fiction")
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let book = repo.get_by_id(created.id).await?;

    assert_eq!(book, Some(created));

    Ok(())
}

/// Tests getting a nonexistent book by ID.
///
/// Verifies that a missing row is not treated as an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let result = repo.get_by_id(999999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
