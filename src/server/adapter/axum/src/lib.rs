/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use std::sync::Arc;

use placard_server::PlacardApp;

/// Re-export placard-server core for convenience
pub use placard_server;

/// Extension trait that converts a `PlacardApp` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for PlacardApp {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(Arc::new(self))
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("placard running on http://localhost:{}", local_addr.port());
    axum::serve(listener, router).await?;
    Ok(())
  }
}
