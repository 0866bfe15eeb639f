use std::future::Future;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::{info, info_span};

use crate::data::post_repository::PostRepository;
use crate::infrastructure::settings::Settings;
use crate::presentation::AppState;
use crate::presentation::grpc::service::GrpcContentService;

pub(crate) async fn run_grpc<R>(
    settings: &Settings,
    state: AppState<R>,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()>
where
    R: PostRepository + 'static,
{
    let listener = TcpListener::bind(&settings.grpc_addr).await?;
    info!("gRPC server listening on {}", listener.local_addr()?);

    Server::builder()
        .concurrency_limit_per_connection(settings.grpc_concurrency_limit)
        .timeout(Duration::from_secs(settings.grpc_request_timeout_secs))
        .trace_fn(|request| info_span!("grpc", path = %request.uri().path()))
        .add_service(GrpcContentService::new(state).into_server())
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await?;

    info!("gRPC server stopped");
    Ok(())
}
