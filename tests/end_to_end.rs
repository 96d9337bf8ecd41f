// tests/end_to_end.rs
use catalog::catalog::Catalog;
use catalog::client::{CatalogApi, CatalogController, HttpCatalogApi, ResponseOrdering};
use catalog::config::ServiceConfig;
use catalog::{routes, server, state::AppState};

async fn spawn_service() -> String {
    let config = ServiceConfig { host: "127.0.0.1".parse().unwrap(), port: 0 };
    let (listener, addr) = server::bind(&config).await.expect("bind ephemeral port");
    let app = routes::app(AppState::new(Catalog::generate()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn http_client_lists_and_suggests() {
    let api = HttpCatalogApi::new(&spawn_service().await).unwrap();

    let listing = api.list_products(1, "Product 5").await.unwrap();
    assert_eq!(listing.total, 11);
    assert_eq!(listing.page, 1);
    let ids: Vec<u32> = listing.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![5, 50, 51, 52, 53, 54, 55, 56, 57, 58]);
    for product in &listing.products {
        assert_eq!(product.category, format!("Category {}", product.id % 10));
        assert_eq!(product.price.split_once('.').unwrap().1.len(), 2);
    }

    let beyond = api.list_products(3, "Product 5").await.unwrap();
    assert!(beyond.products.is_empty());
    assert_eq!(beyond.total, 11);

    let names = api.search_suggestions("").await.unwrap();
    assert_eq!(names.len(), 10);
    assert_eq!(names[0], "Product 1");
    assert_eq!(names[9], "Product 10");
}

#[tokio::test]
async fn http_client_reports_unreachable_service() {
    let api = HttpCatalogApi::new("http://127.0.0.1:9").unwrap();
    assert!(api.list_products(1, "").await.is_err());
}

#[tokio::test]
async fn controller_drives_a_live_service() {
    let api = HttpCatalogApi::new(&spawn_service().await).unwrap();
    let mut controller = CatalogController::new(api, ResponseOrdering::Latest);
    let mut updates = controller.subscribe();

    controller.mount().unwrap().await.unwrap();
    assert_eq!(controller.state().total_items, 100);

    controller.input("product 9");
    // Suggestions and listing land separately; wait until both have.
    while controller.state().suggestions.is_empty() || controller.state().total_items != 11 {
        updates.changed().await.unwrap();
    }
    assert_eq!(controller.state().suggestions[0], "Product 9");

    controller.next_page().unwrap().await.unwrap();
    let state = controller.state();
    assert_eq!(state.current_page, 2);
    assert_eq!(state.products.len(), 1);
    assert_eq!(state.products[0].id, 99);
}
