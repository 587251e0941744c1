use ferrous_dig_domain::config::ResolverConfig;
use std::net::{IpAddr, Ipv4Addr};
use tracing::{debug, warn};

/// Used when neither configuration nor resolv.conf names a nameserver.
pub const FALLBACK_NAMESERVER: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 53));

/// First usable `nameserver` entry of a resolv.conf document.
pub fn parse_resolv_conf(content: &str) -> Option<IpAddr> {
    content
        .lines()
        .map(|line| line.split(['#', ';']).next().unwrap_or("").trim())
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some("nameserver"), Some(addr)) => Some(addr),
                _ => None,
            }
        })
        // Scoped IPv6 entries (fe80::1%eth0) are skipped.
        .find_map(|addr| addr.parse::<IpAddr>().ok())
}

/// The nameserver NS searches go to: configured override, then resolv.conf,
/// then the local stub listener.
pub async fn discover_system_nameserver(config: &ResolverConfig) -> IpAddr {
    if let Some(configured) = &config.system_nameserver {
        match configured.parse::<IpAddr>() {
            Ok(ip) => return ip,
            Err(e) => warn!(value = %configured, error = %e, "Ignoring invalid system_nameserver"),
        }
    }

    match tokio::fs::read_to_string(&config.resolv_conf_path).await {
        Ok(content) => {
            if let Some(ip) = parse_resolv_conf(&content) {
                debug!(path = %config.resolv_conf_path, nameserver = %ip, "System nameserver discovered");
                return ip;
            }
            warn!(path = %config.resolv_conf_path, "No nameserver entry found");
        }
        Err(e) => {
            warn!(path = %config.resolv_conf_path, error = %e, "Failed to read resolv.conf");
        }
    }

    FALLBACK_NAMESERVER
}
