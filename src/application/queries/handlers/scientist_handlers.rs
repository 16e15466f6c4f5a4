//! Scientist Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::GraphReaderPort;
use crate::application::queries::{GetScientist, ListScientists};
use crate::application::serialization::{scientist_to_dict, Dict};

/// GetScientist Handler
pub struct GetScientistHandler {
    graph_reader: Arc<dyn GraphReaderPort>,
}

impl GetScientistHandler {
    pub fn new(graph_reader: Arc<dyn GraphReaderPort>) -> Self {
        Self { graph_reader }
    }

    pub async fn handle(&self, query: GetScientist) -> Result<Dict, ApplicationError> {
        let graph = self
            .graph_reader
            .load_scientist_graph(query.scientist_id)
            .await?;
        let scientist = graph
            .scientist(query.scientist_id)
            .ok_or_else(|| ApplicationError::not_found("Scientist", query.scientist_id))?;

        Ok(scientist_to_dict(scientist, &graph))
    }
}

/// ListScientists Handler
pub struct ListScientistsHandler {
    graph_reader: Arc<dyn GraphReaderPort>,
}

impl ListScientistsHandler {
    pub fn new(graph_reader: Arc<dyn GraphReaderPort>) -> Self {
        Self { graph_reader }
    }

    pub async fn handle(&self, _query: ListScientists) -> Result<Vec<Dict>, ApplicationError> {
        let graph = self.graph_reader.load_graph().await?;
        Ok(graph
            .scientists()
            .map(|scientist| scientist_to_dict(scientist, &graph))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MissionRepositoryPort;
    use crate::domain::{NewMission, NewPlanet};
    use crate::infrastructure::persistence::sqlite::testing::TestStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_scientist_round_trip() {
        let store = TestStore::new().await;
        let ada = store.scientist("Ada", "Physics").await;

        let dict = GetScientistHandler::new(store.graph())
            .handle(GetScientist {
                scientist_id: ada.id(),
            })
            .await
            .unwrap();

        assert_eq!(dict["id"], json!(ada.id()));
        assert_eq!(dict["name"], json!("Ada"));
        assert_eq!(dict["field_of_study"], json!("Physics"));
        assert_eq!(dict["missions"], json!([]));
    }

    #[tokio::test]
    async fn test_get_scientist_missions_are_flat() {
        let store = TestStore::new().await;
        let ada = store.scientist("Ada", "Physics").await;
        let mars = store.planet(NewPlanet::new("Mars", 225, "Sun")).await;
        let mission = NewMission::new("Ares", Some(ada.id()), Some(mars.id())).unwrap();
        store.missions().insert(&mission).await.unwrap();

        let dict = GetScientistHandler::new(store.graph())
            .handle(GetScientist {
                scientist_id: ada.id(),
            })
            .await
            .unwrap();

        let missions = dict["missions"].as_array().unwrap();
        assert_eq!(missions.len(), 1);
        let item = missions[0].as_object().unwrap();
        assert!(!item.contains_key("scientist"));
        assert!(!item.contains_key("planet"));
        assert_eq!(item["name"], json!("Ares"));
        assert_eq!(dict["planets"][0]["name"], json!("Mars"));
    }

    #[tokio::test]
    async fn test_get_missing_scientist() {
        let store = TestStore::new().await;

        let err = GetScientistHandler::new(store.graph())
            .handle(GetScientist { scientist_id: 1 })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_scientists() {
        let store = TestStore::new().await;
        store.scientist("Ada", "Physics").await;
        store.scientist("Grace", "Computing").await;

        let list = ListScientistsHandler::new(store.graph())
            .handle(ListScientists)
            .await
            .unwrap();

        let names: Vec<&str> = list.iter().map(|d| d["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }
}
