use super::*;

/// Tests listing an empty catalog.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_list_for_empty_catalog() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let books = repo.get_all().await?;

    assert!(books.is_empty());

    Ok(())
}

/// Tests listing every stored book.
///
/// Expected: Ok(vec) containing all inserted rows
#[tokio::test]
async fn returns_all_books() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::book::create_book(db).await?;
    let second = factory::book::BookFactory::new(db)
        .title("Dune")
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let books = repo.get_all().await?;

    assert_eq!(books.len(), 2);
    assert!(books.iter().any(|b| b.id == first.id));
    assert!(books.iter().any(|b| b.id == second.id && b.title == "Dune"));

    Ok(())
}

/// Tests listing when the books table does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_books_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);

    assert!(repo.get_all().await.is_err());

    Ok(())
}
