use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aims_store::{
    codec::StoreCodec,
    config::AppConfig,
    guard::{self, Access},
    models::Role,
    services::{
        account_service::AccountDirectory,
        cart_service,
        catalog_service::{Catalog, CatalogQuery},
        session_service,
    },
    storage::FileStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,aims_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let delay = Duration::from_millis(config.mock_delay_ms);

    let store = Arc::new(FileStore::open(&config.data_dir)?);
    let codec = StoreCodec::new(store);
    let catalog = Catalog::with_sample_data(delay);
    let accounts = AccountDirectory::with_sample_data(delay);

    // Guarded route before login: bounced to the login page.
    let access = guard::authorize(None, &[Role::Admin], "/admin/users");
    tracing::info!(?access, "guard before login");

    let identity = accounts.authenticate("manager", "manager123").await?;
    session_service::login(&codec, &identity);

    let access = guard::authorize(
        session_service::current_user(&codec).as_ref(),
        &[Role::Admin],
        "/admin/users",
    );
    tracing::info!(?access, "guard after login as product manager");

    let products = catalog.list(&CatalogQuery::default()).await;
    tracing::info!(count = products.len(), "catalog listed");

    let book = catalog.get("book-clean-code").await?;
    let cd = catalog.get("cd-abbey-road").await?;

    cart_service::clear_cart(&codec);
    cart_service::add_to_cart(&codec, &book, 2);
    cart_service::add_to_cart(&codec, &cd, 1);
    let cart = cart_service::update_cart_item_quantity(&codec, &book.id, 3);
    tracing::info!(
        items = cart.items.len(),
        total = cart.total_price_excluding_vat,
        "cart after updates"
    );

    let cart = cart_service::remove_from_cart(&codec, &cd.id);
    tracing::info!(total = cart.total_price_excluding_vat, "cart after remove");

    session_service::logout(&codec);
    match guard::authorize(None, &[Role::ProductManager], "/product-management") {
        Access::Allow => tracing::warn!("guard allowed access without a session"),
        Access::RedirectTo(path) => tracing::info!(%path, "guard after logout"),
    }

    Ok(())
}
