use super::*;

/// Tests a title search against a stub returning one volume.
///
/// Verifies the raw items are returned and the request carries the
/// title-restricted query and the result cap.
///
/// Expected: Ok(vec) with one item, query `intitle:Hobbit`, `maxResults=10`
#[tokio::test]
async fn returns_items_for_title_search() -> Result<(), TestError> {
    let stub =
        SearchApiStub::respond_with(fixture::volume::response(vec![fixture::volume::hobbit()]))
            .await?;
    let client = reqwest::Client::new();

    let api = BookSearchApi::new(&client, stub.url());
    let items = api
        .search(&params("Hobbit", SearchMode::Title))
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].volume_info.title.as_deref(),
        Some(fixture::volume::HOBBIT_TITLE)
    );

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["q"], "intitle:Hobbit");
    assert_eq!(requests[0]["maxResults"], MAX_RESULTS.to_string());

    Ok(())
}

/// Tests that author and unrestricted modes shape the query accordingly.
///
/// Expected: `inauthor:` prefix for author mode, bare text otherwise
#[tokio::test]
async fn shapes_query_by_mode() -> Result<(), TestError> {
    let stub = SearchApiStub::respond_with(fixture::volume::empty_response()).await?;
    let client = reqwest::Client::new();
    let api = BookSearchApi::new(&client, stub.url());

    api.search(&params("Le Guin", SearchMode::Author))
        .await
        .unwrap();
    api.search(&params("Le Guin", SearchMode::Any)).await.unwrap();

    let requests = stub.requests();
    assert_eq!(requests[0]["q"], "inauthor:Le Guin");
    assert_eq!(requests[1]["q"], "Le Guin");

    Ok(())
}

/// Tests a response without an `items` key.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_list_when_nothing_matched() -> Result<(), TestError> {
    let stub = SearchApiStub::respond_with(fixture::volume::empty_response()).await?;
    let client = reqwest::Client::new();

    let api = BookSearchApi::new(&client, stub.url());
    let items = api
        .search(&params("zzzzzz", SearchMode::Title))
        .await
        .unwrap();

    assert!(items.is_empty());

    Ok(())
}

/// Tests a non-success response from the API.
///
/// Expected: Err(SearchError::Status(503))
#[tokio::test]
async fn fails_on_error_status() -> Result<(), TestError> {
    let stub = SearchApiStub::fail_with(StatusCode::SERVICE_UNAVAILABLE).await?;
    let client = reqwest::Client::new();

    let api = BookSearchApi::new(&client, stub.url());
    let result = api.search(&params("Hobbit", SearchMode::Title)).await;

    assert!(matches!(
        result,
        Err(SearchError::Status(status)) if status == StatusCode::SERVICE_UNAVAILABLE
    ));

    Ok(())
}

/// Tests a search when the API cannot be reached.
///
/// Expected: Err(SearchError::Request)
#[tokio::test]
async fn fails_when_api_unreachable() -> Result<(), TestError> {
    let url = search_api::unreachable_url().await?;
    let client = reqwest::Client::new();

    let api = BookSearchApi::new(&client, &url);
    let result = api.search(&params("Hobbit", SearchMode::Title)).await;

    assert!(matches!(result, Err(SearchError::Request(_))));

    Ok(())
}

/// Tests a successful status with a body that is not a search response.
///
/// Expected: Err(SearchError::Request)
#[tokio::test]
async fn fails_on_undecodable_body() -> Result<(), TestError> {
    let stub = SearchApiStub::respond_with(serde_json::json!(["not", "an", "object"])).await?;
    let client = reqwest::Client::new();

    let api = BookSearchApi::new(&client, stub.url());
    let result = api.search(&params("Hobbit", SearchMode::Title)).await;

    assert!(matches!(result, Err(SearchError::Request(_))));

    Ok(())
}
