// src/bin/catalog_client.rs
use catalog::client::command::Command;
use catalog::client::view::render;
use catalog::client::{CatalogController, HttpCatalogApi, ResponseOrdering};
use catalog::config::API_BASE_URL;
use catalog::error::AppError;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    catalog::init_tracing();

    let api = HttpCatalogApi::new(API_BASE_URL)?;
    info!(base_url = api.base_url(), "Catalog client starting");

    let mut controller = CatalogController::new(api, ResponseOrdering::default());

    // Redraw on every state change.
    let mut updates = controller.subscribe();
    let renderer = tokio::spawn(async move {
        loop {
            let screen = render(&updates.borrow_and_update());
            print!("{CLEAR_SCREEN}{screen}");
            println!("type to search | :pick N | :page N | :next | :prev | :quit");
            if updates.changed().await.is_err() {
                break;
            }
        }
    });

    controller.mount();

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Input(text) => controller.input(text),
            Command::Pick(n) => {
                if n == 0 || controller.select_suggestion_at(n - 1).is_none() {
                    warn!(n, "No such suggestion");
                }
            }
            Command::Page(page) => {
                controller.go_to_page(page);
            }
            Command::Next => {
                if controller.next_page().is_none() {
                    warn!("Already on the last page");
                }
            }
            Command::Previous => {
                if controller.previous_page().is_none() {
                    warn!("Already on the first page");
                }
            }
            Command::Quit => break,
            Command::Unknown(raw) => warn!(%raw, "Unknown command"),
        }
    }

    drop(controller);
    renderer.abort();
    Ok(())
}
