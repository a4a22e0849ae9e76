//! Compile-time host-strategy selection and adapter factories for runtime wiring.

use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, RemoteEndpoints};
use reqwest::Client;

use crate::{HttpExecutionService, HttpFileStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::Remote
    }
}

/// Builds the host service bundle for the selected strategy.
///
/// Both HTTP adapters share one connection pool.
pub fn build_host_services(endpoints: &RemoteEndpoints) -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Remote => {
            let client = Client::new();
            HostServices {
                files: Rc::new(HttpFileStore::with_client(
                    client.clone(),
                    endpoints.file_store_url.clone(),
                )),
                execution: Rc::new(HttpExecutionService::with_client(
                    client,
                    endpoints.execution_url.clone(),
                )),
                host_strategy: HostStrategy::Remote,
            }
        }
        HostStrategy::InProcess | HostStrategy::Stub => HostServices::stub(),
    }
}
