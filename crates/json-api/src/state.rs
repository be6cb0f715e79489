//! State

use std::sync::Arc;

use catalog_app::context::AppContext;

use crate::auth::ApiKey;

/// Everything handlers need, injected once per router.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) api_key: ApiKey,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, api_key: ApiKey) -> Self {
        Self { app, api_key }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, api_key: ApiKey) -> Arc<Self> {
        Arc::new(Self::new(app, api_key))
    }
}
