//! Planet Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::GraphReaderPort;
use crate::application::queries::ListPlanets;
use crate::application::serialization::{planet_to_dict, Dict};

/// ListPlanets Handler
pub struct ListPlanetsHandler {
    graph_reader: Arc<dyn GraphReaderPort>,
}

impl ListPlanetsHandler {
    pub fn new(graph_reader: Arc<dyn GraphReaderPort>) -> Self {
        Self { graph_reader }
    }

    pub async fn handle(&self, _query: ListPlanets) -> Result<Vec<Dict>, ApplicationError> {
        let graph = self.graph_reader.load_graph().await?;
        Ok(graph
            .planets()
            .map(|planet| planet_to_dict(planet, &graph))
            .collect())
    }
}
