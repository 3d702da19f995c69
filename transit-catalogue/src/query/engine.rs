//! Request dispatch.

use rayon::prelude::*;
use tracing::debug;

use super::{QueryError, StatRequest, StatResponse};
use crate::catalogue::{CatalogueError, TransportCatalogue};
use crate::router::{Route, Router};

/// Produces a map of the network from read-only catalogue data.
pub trait MapRenderer {
    fn render(&self, catalogue: &TransportCatalogue) -> String;
}

/// Answers statistics requests against a catalogue and its router.
///
/// The engine only reads shared state, so batches can be answered in
/// parallel without locking.
#[derive(Clone, Copy)]
pub struct QueryEngine<'a> {
    router: &'a Router<'a>,
    renderer: Option<&'a (dyn MapRenderer + Sync)>,
}

impl std::fmt::Debug for QueryEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEngine")
            .field("router", &self.router)
            .field("has_renderer", &self.renderer.is_some())
            .finish()
    }
}

impl<'a> QueryEngine<'a> {
    /// An engine without a map renderer. Map requests answer with
    /// [`QueryError::MapUnavailable`].
    pub fn new(router: &'a Router<'a>) -> Self {
        Self {
            router,
            renderer: None,
        }
    }

    pub fn with_renderer(mut self, renderer: &'a (dyn MapRenderer + Sync)) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn catalogue(&self) -> &'a TransportCatalogue {
        self.router.catalogue()
    }

    /// Answer a single request.
    pub fn dispatch(&self, request: &StatRequest) -> StatResponse {
        let id = request.id();
        let answer = match request {
            StatRequest::Bus { name, .. } => self
                .catalogue()
                .bus_info(name)
                .map(|stats| StatResponse::Bus { id, stats })
                .map_err(QueryError::from),
            StatRequest::Stop { name, .. } => self
                .catalogue()
                .stop_info(name)
                .map(|buses| StatResponse::Stop {
                    id,
                    buses: buses.iter().cloned().collect(),
                })
                .map_err(QueryError::from),
            StatRequest::Route { from, to, .. } => self
                .route(from, to)
                .map(|route| StatResponse::Route { id, route }),
            StatRequest::Map { .. } => self
                .renderer
                .map(|r| StatResponse::Map {
                    id,
                    map: r.render(self.catalogue()),
                })
                .ok_or(QueryError::MapUnavailable),
        };
        answer.unwrap_or_else(|error| StatResponse::Error { id, error })
    }

    /// Answer a batch in order.
    pub fn answer_all(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        debug!(requests = requests.len(), "answering batch");
        requests.iter().map(|r| self.dispatch(r)).collect()
    }

    /// Answer a batch on the rayon pool. Responses keep request order.
    pub fn answer_all_parallel(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        debug!(requests = requests.len(), "answering batch in parallel");
        requests.par_iter().map(|r| self.dispatch(r)).collect()
    }

    fn route(&self, from: &str, to: &str) -> Result<Route, QueryError> {
        let catalogue = self.catalogue();
        let lookup = |name: &str| {
            catalogue
                .find_stop(name)
                .ok_or_else(|| CatalogueError::StopNotFound(name.to_string()))
        };
        let (source, target) = (lookup(from)?, lookup(to)?);

        self.router
            .shortest_route(source, target)
            .ok_or_else(|| QueryError::Unreachable {
                from: from.to_string(),
                to: to.to_string(),
            })
    }
}
