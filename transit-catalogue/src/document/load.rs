//! Turning request documents into catalogue state and responses.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use tracing::debug;

use super::{BaseRequest, DocumentError, RequestDocument, StatResponseDto};
use crate::catalogue::TransportCatalogue;
use crate::domain::{Coordinates, RouteKind};
use crate::query::{QueryEngine, StatRequest};
use crate::router::Router;

/// Build a catalogue from base requests.
///
/// Requests are applied in three passes regardless of their order in the
/// document: every stop, then every road distance, then every bus. A stop
/// may therefore name distances to, and buses may use, stops declared later.
pub fn build_catalogue(requests: &[BaseRequest]) -> Result<TransportCatalogue, DocumentError> {
    let mut catalogue = TransportCatalogue::new();

    for request in requests {
        if let BaseRequest::Stop {
            name,
            latitude,
            longitude,
            ..
        } = request
        {
            let coordinates =
                Coordinates::new(*latitude, *longitude).map_err(|source| {
                    DocumentError::InvalidStop {
                        name: name.clone(),
                        source,
                    }
                })?;
            catalogue.add_stop(name.as_str(), coordinates);
        }
    }

    for request in requests {
        if let BaseRequest::Stop {
            name,
            road_distances,
            ..
        } = request
        {
            for (to, meters) in road_distances {
                catalogue.set_distance(name, to, *meters)?;
            }
        }
    }

    for request in requests {
        if let BaseRequest::Bus {
            name,
            stops,
            is_roundtrip,
        } = request
        {
            catalogue.add_bus(
                name.as_str(),
                stops.as_slice(),
                RouteKind::from_roundtrip(*is_roundtrip),
            )?;
        }
    }

    debug!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        distances = catalogue.distance_count(),
        "catalogue loaded"
    );
    Ok(catalogue)
}

/// Load the network, build the router and answer every statistics request.
///
/// With `parallel` set the batch is answered on the rayon pool. The output is
/// the same either way.
pub fn process(
    document: RequestDocument,
    parallel: bool,
) -> Result<Vec<StatResponseDto>, DocumentError> {
    let catalogue = build_catalogue(&document.base_requests)?;
    let router = Router::new(&catalogue, document.routing_settings)?;
    let engine = QueryEngine::new(&router);

    let requests: Vec<StatRequest> = document
        .stat_requests
        .into_iter()
        .map(StatRequest::from)
        .collect();
    let responses = if parallel {
        engine.answer_all_parallel(&requests)
    } else {
        engine.answer_all(&requests)
    };

    Ok(responses.into_iter().map(StatResponseDto::from).collect())
}

/// Parse a request document.
pub fn read_document(reader: impl Read) -> Result<RequestDocument, DocumentError> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

/// Parse a request document from a file.
pub fn read_document_from_path(path: &Path) -> Result<RequestDocument, DocumentError> {
    let file = File::open(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_document(file)
}

/// Write responses as a pretty-printed JSON array followed by a newline.
pub fn write_responses(
    mut writer: impl Write,
    responses: &[StatResponseDto],
) -> Result<(), DocumentError> {
    serde_json::to_writer_pretty(&mut writer, responses)
        .map_err(|e| DocumentError::Output(e.into()))?;
    writeln!(writer).map_err(DocumentError::Output)?;
    writer.flush().map_err(DocumentError::Output)
}
