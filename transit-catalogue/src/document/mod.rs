//! JSON request and response documents.
//!
//! A request document carries the network description (`base_requests`),
//! routing settings and a batch of statistics requests. Processing it yields
//! a JSON array with one response per statistics request, in order.

mod dto;
mod error;
mod load;

pub use dto::{
    BaseRequest, BusResponse, ErrorResponse, MapResponse, RequestDocument, RouteItemDto,
    RouteResponse, StatRequestDto, StatResponseDto, StopResponse,
};
pub use error::DocumentError;
pub use load::{build_catalogue, process, read_document, read_document_from_path, write_responses};
