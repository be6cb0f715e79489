//! Auth middleware.

use std::sync::Arc;

use salvo::prelude::*;
use tracing::warn;

use crate::{extensions::*, state::State};

/// Header carrying the API key.
pub(crate) const API_KEY_HEADER: &str = "x-api-key";

/// Query parameter accepted in place of the header.
pub(crate) const API_KEY_QUERY_PARAM: &str = "code";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    let Some(presented) = extract_api_key(req) else {
        warn!("request without an API key rejected");

        res.render(StatusError::unauthorized().brief("Missing API key"));
        ctrl.skip_rest();

        return;
    };

    if !state.api_key.verify(&presented) {
        warn!("request with an invalid API key rejected");

        res.render(StatusError::unauthorized().brief("Invalid API key"));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

/// The header wins when both the header and the query parameter are present.
fn extract_api_key(req: &Request) -> Option<String> {
    req.header::<String>(API_KEY_HEADER)
        .or_else(|| req.query::<String>(API_KEY_QUERY_PARAM))
        .filter(|key| !key.is_empty())
}
