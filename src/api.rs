use dioxus::prelude::*;

use crate::shared::types::UsageResponse;

/// Proxies one `GET {base_url}/usage` for the dashboard.
///
/// Failure detail stays in the server log; the client only learns that the
/// fetch failed.
#[server(GetUsage)]
pub async fn get_usage() -> Result<UsageResponse, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::usage_api::fetch_usage;
        use crate::usage::state::FETCH_ERROR_MESSAGE;
        use dioxus::logger::tracing::error;

        match fetch_usage().await {
            Ok(resp) => Ok(resp),
            Err(e) => {
                error!("[get_usage] {e:#}");
                Err(ServerFnError::ServerError(FETCH_ERROR_MESSAGE.to_string()))
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::ServerError(
            "usage API is only reachable from the server".to_string(),
        ))
    }
}
