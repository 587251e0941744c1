use super::dns::DispatchQueryUseCase;
use ferrous_dig_domain::{DomainError, DomainResult, LookupRequest};
use std::sync::Arc;
use tracing::info;

/// Validates a lookup request and runs every (domain, nameserver) unit in order.
pub struct HandleLookupUseCase {
    dispatcher: Arc<DispatchQueryUseCase>,
}

impl HandleLookupUseCase {
    pub fn new(dispatcher: Arc<DispatchQueryUseCase>) -> Self {
        Self { dispatcher }
    }

    pub async fn execute(&self, request: LookupRequest) -> Result<Vec<DomainResult>, DomainError> {
        let lookup = request.validate()?;

        info!(
            domains = lookup.domains.len(),
            nameservers = lookup.nameservers.len(),
            record_type = %lookup.record_type,
            mode = ?lookup.options.mode(),
            "Handling lookup"
        );

        let mut response = Vec::with_capacity(lookup.domains.len());
        for domain in &lookup.domains {
            let mut results = Vec::with_capacity(lookup.nameservers.len());
            for nameserver in &lookup.nameservers {
                results.push(
                    self.dispatcher
                        .execute(domain, &lookup.requested, nameserver, &lookup.options)
                        .await,
                );
            }

            response.push(DomainResult {
                domain: domain.clone(),
                record_type: lookup.record_type.clone(),
                options: lookup.options,
                results,
            });
        }

        Ok(response)
    }
}
