//! Web服务器

use axum::{
    routing::{get, post},
    Router,
};
use pcos_core::Result;
use pcos_recommend::NarrativeGenerator;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::handlers::{api_root, diagnose, health};

/// 处理器共享状态
#[derive(Clone)]
pub struct AppState {
    /// 注入的叙述生成器（Gemini或演示实现）
    pub generator: Arc<dyn NarrativeGenerator>,
}

pub struct WebServer {
    addr: SocketAddr,
    app: Router,
}

impl WebServer {
    pub fn new(addr: SocketAddr, generator: Arc<dyn NarrativeGenerator>) -> Self {
        let state = AppState { generator };
        let app = Self::create_app(state);

        Self { addr, app }
    }

    fn create_app(state: AppState) -> Router {
        Router::new()
            // 根路径
            .route("/", get(api_root))

            // 健康检查
            .route("/health", get(health))

            // API路由
            .nest("/api/v1", api_routes())
            .with_state(state)

            // 全局中间件
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(
                        CorsLayer::new()
                            .allow_origin(Any)
                            .allow_methods(Any)
                            .allow_headers(Any),
                    ),
            )
    }

    pub async fn run(self) -> Result<()> {
        info!("Starting web server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, self.app)
            .await
            .map_err(pcos_core::PcosError::Network)?;

        Ok(())
    }
}

/// API v1 路由
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_root))
        .route("/diagnosis", post(diagnose))
}
