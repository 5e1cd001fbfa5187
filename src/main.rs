use std::process::exit;

use rolodex_web::logging;
use rolodex_web::prelude::*;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let cli = parse_cli();
    logging::init(cli.log_level()?);

    let medium = cli.storage_medium()?;
    let addr = cli.bind_addr()?;

    let store = parse_storage_type(medium, &cli.data_path);
    store.initialize()?;

    if medium.is_json() {
        tracing::info!(medium = store.medium(), path = %cli.data_path.display(), "storage ready");
    } else {
        tracing::warn!("using in-memory storage; contacts are lost on exit");
    }

    let app = create_router(AppState::new(store));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("contact book listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
