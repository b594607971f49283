//! PCOS诊断服务器主程序

mod config;

use crate::config::ServiceConfig;
use clap::Parser;
use pcos_core::Result;
use pcos_recommend::{CannedGenerator, GeminiClient, NarrativeGenerator};
use pcos_web::WebServer;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// PCOS诊断服务器命令行参数
#[derive(Parser, Debug)]
#[command(name = "pcos-server")]
#[command(about = "PCOS临床诊断与生活方式推荐服务器 (Rotterdam标准)")]
struct Args {
    /// 监听主机
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// 服务器端口
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// 配置文件路径
    #[arg(short, long)]
    config: Option<String>,

    /// 日志级别
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(args.log_level.as_str())
        .init();

    info!("启动PCOS诊断服务器...");

    // 加载配置
    let service_config = ServiceConfig::load(args.config.as_deref())?;

    info!("PCOS服务器配置:");
    info!("  监听地址: {}:{}", args.host, args.port);
    info!("  Gemini模型: {}", service_config.gemini_model);

    // 选择叙述生成器：无密钥时降级为演示模式
    let generator: Arc<dyn NarrativeGenerator> = if service_config.has_api_key() {
        info!("  推荐模式: Gemini");
        Arc::new(GeminiClient::new(
            service_config.gemini_api_key.unwrap_or_default(),
            service_config.gemini_model,
        ))
    } else {
        warn!("PCOS_GEMINI_API_KEY未配置，推荐降级为演示模式");
        Arc::new(CannedGenerator)
    };

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| pcos_core::PcosError::Config(format!("Invalid listen address: {}", e)))?;

    // 启动Web服务器
    let server = WebServer::new(addr, generator);
    server.run().await
}
