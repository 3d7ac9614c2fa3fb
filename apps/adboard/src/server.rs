//! Server initialization and lifecycle.
//!
//! One process, two transports, one store: the REST gateway and the gRPC
//! server run concurrently over the same pair of in-memory repositories and
//! both drain on SIGINT/SIGTERM.

use std::net::SocketAddr;

use axum::Router;
use axum_helpers::{create_app, create_router, health_router, shutdown_signal};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use domain_ads::{AdRepository, AdService, AdsState, InMemoryAdRepository};
use domain_users::{InMemoryUserRepository, UserRepository, UserService};
use eyre::{Result, WrapErr};
use rpc::ads::ads_service_server::AdsServiceServer;
use rpc::users::users_service_server::UsersServiceServer;
use timefmt::DateTimeFormatter;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tracing::info;

use crate::config::Config;
use crate::grpc::{AdsGrpcService, UsersGrpcService};
use crate::openapi::ApiDoc;

/// Assemble the complete REST router: domain routes under `/api/v1`,
/// OpenAPI document, request tracing, health endpoint.
pub fn rest_router<R, U>(ads: AdService<R>, users: UserService<U>) -> Router
where
    R: AdRepository + 'static,
    U: UserRepository + 'static,
{
    let api = Router::new()
        .nest(
            "/ads",
            domain_ads::handlers::router(AdsState::new(ads, users.clone())),
        )
        .nest("/users", domain_users::handlers::router(users));

    create_router::<ApiDoc>(api).merge(health_router(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Run the service.
///
/// This is the main entry point for server initialization. It:
/// 1. Sets up structured logging (env-aware: JSON for prod, pretty for dev)
/// 2. Builds the shared in-memory repositories and domain services
/// 3. Starts the REST gateway and the gRPC server concurrently
/// 4. Shuts both down gracefully on SIGINT/SIGTERM
pub async fn run() -> Result<()> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let config = Config::from_env().wrap_err("Failed to load configuration")?;

    // One store, shared by both transports.
    let ad_service = AdService::new(InMemoryAdRepository::new(), DateTimeFormatter::seconds());
    let user_service = UserService::new(InMemoryUserRepository::new());

    let router = rest_router(ad_service.clone(), user_service.clone());

    let grpc_addr: SocketAddr = config
        .grpc
        .address()
        .parse()
        .wrap_err_with(|| format!("Failed to parse gRPC address: {}", config.grpc.address()))?;

    // Health check service for readiness probes (grpc.health.v1.Health).
    let (mut health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_service_status("ads.AdsService", tonic_health::ServingStatus::Serving)
        .await;
    health_reporter
        .set_service_status("users.UsersService", tonic_health::ServingStatus::Serving)
        .await;
    // Empty service name for generic health checks.
    health_reporter
        .set_service_status("", tonic_health::ServingStatus::Serving)
        .await;

    info!("gRPC server listening on {}", grpc_addr);

    let grpc_server = Server::builder()
        .add_service(health_service)
        .add_service(
            AdsServiceServer::new(AdsGrpcService::new(ad_service, user_service.clone()))
                .accept_compressed(CompressionEncoding::Zstd)
                .send_compressed(CompressionEncoding::Zstd),
        )
        .add_service(
            UsersServiceServer::new(UsersGrpcService::new(user_service))
                .accept_compressed(CompressionEncoding::Zstd)
                .send_compressed(CompressionEncoding::Zstd),
        )
        .serve_with_shutdown(grpc_addr, shutdown_signal());

    let http = async {
        create_app(router, &config.http)
            .await
            .map_err(|e| eyre::eyre!("HTTP server failed: {e}"))
    };
    let grpc = async { grpc_server.await.map_err(|e| eyre::eyre!("gRPC server failed: {e}")) };

    tokio::try_join!(http, grpc)?;

    info!("adboard shutdown complete");
    Ok(())
}
