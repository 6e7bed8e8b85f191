use mockito::Matcher;
use restaurant_finder::presenter::render_top;
use restaurant_finder::{ClientConfigBuilder, ClientError, RestaurantClient};

const PATH: &str = "/discovery/uk/restaurants/enriched/bypostcode";

fn client_for(server: &mockito::ServerGuard) -> RestaurantClient {
    let config = ClientConfigBuilder::default()
        .base_url(server.url())
        .build()
        .unwrap();
    RestaurantClient::new(config).unwrap()
}

fn restaurants_body(count: usize) -> String {
    let list = (0..count)
        .map(|i| {
            serde_json::json!({
                "name": format!("R{i}"),
                "address": {"firstLine": format!("{i} Rd"), "city": "X", "postalCode": "AB1"},
                "rating": {"starRating": 4.5},
                "cuisines": [{"name": "Pizza"}, {"name": "Italian"}]
            })
        })
        .collect::<Vec<_>>();
    serde_json::json!({ "restaurants": list }).to_string()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_and_render_single_restaurant() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("{PATH}/AB1").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"restaurants":[{"name":"A","address":{"firstLine":"1 Rd","city":"X","postalCode":"AB1"},"rating":{"starRating":4.5},"cuisines":[{"name":"Pizza"}]}]}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let restaurants = client_for(&server).fetch_restaurants("AB1").await.unwrap();
    mock.assert_async().await;

    let mut out = Vec::new();
    render_top(&restaurants, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Restaurant: 1"));
    assert!(out.contains("Name: A"));
    assert!(out.contains("Address: 1 Rd, X, AB1"));
    assert!(out.contains("Cuisines: Pizza"));
    assert!(out.contains("Rating: 4.5"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_keeps_api_order() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", format!("{PATH}/AB1").as_str())
        .with_status(200)
        .with_body(restaurants_body(15))
        .create_async()
        .await;

    let restaurants = client_for(&server).fetch_restaurants("AB1").await.unwrap();
    assert_eq!(restaurants.len(), 15);
    let names: Vec<_> = restaurants.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names[0], "R0");
    assert_eq!(names[14], "R14");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_postal_code_with_space_is_encoded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(r"/bypostcode/EC4M%207RF$".to_string()))
        .with_status(200)
        .with_body(r#"{"restaurants":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let restaurants = client_for(&server)
        .fetch_restaurants("EC4M 7RF")
        .await
        .unwrap();
    assert!(restaurants.is_empty());
    mock.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", format!("{PATH}/AB1").as_str())
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let err = client_for(&server).fetch_restaurants("AB1").await.unwrap_err();
    assert!(err.is_decode(), "unexpected error: {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_status_is_network_error() {
    let mut server = mockito::Server::new_async().await;
    // a valid restaurant body must still be rejected on a failing status
    let _mock = server
        .mock("GET", format!("{PATH}/AB1").as_str())
        .with_status(503)
        .with_body(restaurants_body(2))
        .create_async()
        .await;

    let err = client_for(&server).fetch_restaurants("AB1").await.unwrap_err();
    assert!(err.is_network());
    match err {
        ClientError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/bypostcode/AB1"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_is_network_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let err = client_for(&server).fetch_restaurants("ZZ9").await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 404, .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dot_only_postal_code_never_leaves_client() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .with_status(200)
        .with_body(r#"{"restaurants":[]}"#)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    for code in [".", ".."] {
        let err = client.fetch_restaurants(code).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidPostalCode(_)));
    }
    mock.assert_async().await;
}
