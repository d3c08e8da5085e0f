use std::sync::Arc;

use coi_server::config::{AppState, Config};
use coi_server::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    // Tokio runtime, thread count from `server.workers` when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    let listener = match server::create_listener(addr) {
        Ok(l) => l,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            return Err(e.into());
        }
    };

    let state = Arc::new(AppState::new(&cfg));
    logger::log_server_start(&addr, &cfg);

    let shutdown = async {
        match server::shutdown_signal().await {
            Ok(name) => logger::log_shutdown(name),
            Err(e) => {
                logger::log_error(&format!("Failed to register signal handlers: {e}"));
                std::future::pending::<()>().await;
            }
        }
    };

    server::start_server_loop(listener, state, shutdown).await;
    Ok(())
}
