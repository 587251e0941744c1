use ferrous_dig_application::use_cases::{
    DispatchQueryUseCase, HandleLookupUseCase, NsSearchUseCase, TraceDomainUseCase,
};
use ferrous_dig_domain::Config;
use ferrous_dig_infrastructure::dns::{DnsForwarder, FastrandSource};
use ferrous_dig_infrastructure::system::{discover_system_nameserver, SystemNameserverLocator};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct Services {
    pub lookup: Arc<HandleLookupUseCase>,
}

impl Services {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let transport = Arc::new(DnsForwarder::new());
        let root_hints = Arc::new(config.root_hints()?);
        let resolver_timeout = Duration::from_millis(config.resolver.query_timeout_ms);
        let port = config.resolver.port;

        let system_ip = discover_system_nameserver(&config.resolver).await;
        let system_nameserver = SocketAddr::new(system_ip, port);

        info!(
            root_servers = root_hints.len(),
            system_nameserver = %system_nameserver,
            "DNS services configured"
        );

        let trace = Arc::new(
            TraceDomainUseCase::new(
                transport.clone(),
                root_hints,
                Arc::new(FastrandSource),
                Duration::from_secs(config.trace.timeout_secs),
            )
            .with_port(port),
        );

        let nssearch = Arc::new(NsSearchUseCase::new(
            transport.clone(),
            system_nameserver,
            resolver_timeout,
        ));

        let dispatcher = Arc::new(
            DispatchQueryUseCase::new(
                transport,
                Arc::new(SystemNameserverLocator::new()),
                trace,
                nssearch,
                resolver_timeout,
            )
            .with_port(port),
        );

        Ok(Self {
            lookup: Arc::new(HandleLookupUseCase::new(dispatcher)),
        })
    }
}
