use axum::http::{HeaderValue, Request};

use tower_http::request_id::{MakeRequestId, RequestId};

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

// Request ids are a per-process counter starting at 0.
#[derive(Clone, Default)]
pub struct CounterRequestId {
    counter: Arc<AtomicU64>,
}

impl MakeRequestId for CounterRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let next_id = self.counter.fetch_add(1, Ordering::Relaxed);

        Some(RequestId::new(HeaderValue::from(next_id)))
    }
}
