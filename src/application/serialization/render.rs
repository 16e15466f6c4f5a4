//! Entity Rendering - 实体到 JSON 映射的转换
//!
//! 每个节点的生效规则 = 父节点传下的分支规则 ∪ 该实体自身的规则

use serde_json::{json, Map, Value};

use super::graph::EntityGraph;
use super::rules::SerializeRules;
use crate::domain::{Mission, Planet, Scientist};

/// Planet 自身规则
pub const PLANET_RULES: &[&str] = &["-missions.planet", "-scientists.missions"];

/// Scientist 自身规则
pub const SCIENTIST_RULES: &[&str] = &[
    "-missions.scientist",
    "-planets.missions",
    "-missions.planet",
    "-planets.scientists",
];

/// Mission 自身规则
pub const MISSION_RULES: &[&str] = &[
    "-scientist.missions",
    "-planet.missions",
    "-planet.id",
    "-scientist.planets",
];

/// 嵌套深度上限；超过后只输出标量字段
const MAX_DEPTH: usize = 8;

/// 渲染结果（JSON 对象）
pub type Dict = Map<String, Value>;

#[derive(Clone, Copy)]
enum Node<'a> {
    Scientist(&'a Scientist),
    Planet(&'a Planet),
    Mission(&'a Mission),
}

enum Relation<'a> {
    One(Option<Node<'a>>),
    Many(Vec<Node<'a>>),
}

impl<'a> Node<'a> {
    fn own_rules(&self) -> SerializeRules {
        match self {
            Node::Scientist(_) => SerializeRules::parse(SCIENTIST_RULES),
            Node::Planet(_) => SerializeRules::parse(PLANET_RULES),
            Node::Mission(_) => SerializeRules::parse(MISSION_RULES),
        }
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        match self {
            Node::Scientist(s) => vec![
                ("id", json!(s.id())),
                ("name", json!(s.name())),
                ("field_of_study", json!(s.field_of_study())),
            ],
            Node::Planet(p) => vec![
                ("id", json!(p.id())),
                ("name", json!(p.name())),
                ("distance_from_earth", json!(p.distance_from_earth())),
                ("nearest_star", json!(p.nearest_star())),
            ],
            Node::Mission(m) => vec![
                ("id", json!(m.id())),
                ("name", json!(m.name())),
                ("scientist_id", json!(m.scientist_id())),
                ("planet_id", json!(m.planet_id())),
            ],
        }
    }

    fn relation_names(&self) -> &'static [&'static str] {
        match self {
            Node::Scientist(_) => &["missions", "planets"],
            Node::Planet(_) => &["missions", "scientists"],
            Node::Mission(_) => &["scientist", "planet"],
        }
    }

    fn relation(&self, name: &str, graph: &'a EntityGraph) -> Relation<'a> {
        match (self, name) {
            (Node::Scientist(s), "missions") => Relation::Many(
                graph
                    .missions_of_scientist(s.id())
                    .into_iter()
                    .map(Node::Mission)
                    .collect(),
            ),
            (Node::Scientist(s), "planets") => Relation::Many(
                graph
                    .planets_of_scientist(s.id())
                    .into_iter()
                    .map(Node::Planet)
                    .collect(),
            ),
            (Node::Planet(p), "missions") => Relation::Many(
                graph
                    .missions_of_planet(p.id())
                    .into_iter()
                    .map(Node::Mission)
                    .collect(),
            ),
            (Node::Planet(p), "scientists") => Relation::Many(
                graph
                    .scientists_of_planet(p.id())
                    .into_iter()
                    .map(Node::Scientist)
                    .collect(),
            ),
            (Node::Mission(m), "scientist") => {
                Relation::One(graph.scientist(m.scientist_id()).map(Node::Scientist))
            }
            (Node::Mission(m), "planet") => {
                Relation::One(graph.planet(m.planet_id()).map(Node::Planet))
            }
            _ => Relation::Many(Vec::new()),
        }
    }
}

fn render<'a>(
    node: Node<'a>,
    graph: &'a EntityGraph,
    inherited: &SerializeRules,
    depth: usize,
) -> Dict {
    let rules = inherited.merged(&node.own_rules());
    let mut dict = Dict::new();

    for (key, value) in node.columns() {
        if !rules.excludes(key) {
            dict.insert(key.to_string(), value);
        }
    }

    if depth >= MAX_DEPTH {
        return dict;
    }

    for name in node.relation_names() {
        if rules.excludes(name) {
            continue;
        }
        let branch = rules.branch(name);
        let value = match node.relation(name, graph) {
            Relation::One(Some(child)) => Value::Object(render(child, graph, &branch, depth + 1)),
            Relation::One(None) => Value::Null,
            Relation::Many(children) => Value::Array(
                children
                    .into_iter()
                    .map(|child| Value::Object(render(child, graph, &branch, depth + 1)))
                    .collect(),
            ),
        };
        dict.insert((*name).to_string(), value);
    }

    dict
}

/// Scientist → dict
pub fn scientist_to_dict(scientist: &Scientist, graph: &EntityGraph) -> Dict {
    render(
        Node::Scientist(scientist),
        graph,
        &SerializeRules::default(),
        0,
    )
}

/// Planet → dict
pub fn planet_to_dict(planet: &Planet, graph: &EntityGraph) -> Dict {
    render(Node::Planet(planet), graph, &SerializeRules::default(), 0)
}

/// Mission → dict
pub fn mission_to_dict(mission: &Mission, graph: &EntityGraph) -> Dict {
    render(Node::Mission(mission), graph, &SerializeRules::default(), 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewMission, NewPlanet, NewScientist};

    fn keys(value: &Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }

    fn graph() -> EntityGraph {
        EntityGraph::new(
            vec![NewScientist::new("Ada", "Physics").unwrap().with_id(1)],
            vec![NewPlanet::new("Mars", 225, "Sun").with_id(2)],
            vec![NewMission::new("Ares", Some(1), Some(2)).unwrap().with_id(3)],
        )
    }

    #[test]
    fn test_scientist_shape() {
        let graph = graph();
        let dict = Value::Object(scientist_to_dict(graph.scientist(1).unwrap(), &graph));

        assert_eq!(
            keys(&dict),
            vec!["field_of_study", "id", "missions", "name", "planets"]
        );
        assert_eq!(
            keys(&dict["missions"][0]),
            vec!["id", "name", "planet_id", "scientist_id"]
        );
        assert_eq!(
            keys(&dict["planets"][0]),
            vec!["distance_from_earth", "id", "name", "nearest_star"]
        );
    }

    #[test]
    fn test_scientist_without_missions() {
        let graph = EntityGraph::new(
            vec![NewScientist::new("Ada", "Physics").unwrap().with_id(1)],
            Vec::new(),
            Vec::new(),
        );
        let dict = scientist_to_dict(graph.scientist(1).unwrap(), &graph);
        assert_eq!(dict["missions"], json!([]));
        assert_eq!(dict["planets"], json!([]));
    }

    #[test]
    fn test_planet_shape() {
        let graph = graph();
        let dict = Value::Object(planet_to_dict(graph.planet(2).unwrap(), &graph));

        assert_eq!(
            keys(&dict),
            vec![
                "distance_from_earth",
                "id",
                "missions",
                "name",
                "nearest_star",
                "scientists"
            ]
        );
        assert_eq!(
            keys(&dict["missions"][0]),
            vec!["id", "name", "planet_id", "scientist", "scientist_id"]
        );
        assert_eq!(
            keys(&dict["missions"][0]["scientist"]),
            vec!["field_of_study", "id", "name"]
        );
        assert_eq!(
            keys(&dict["scientists"][0]),
            vec!["field_of_study", "id", "name", "planets"]
        );
        assert_eq!(
            keys(&dict["scientists"][0]["planets"][0]),
            vec!["distance_from_earth", "id", "name", "nearest_star"]
        );
    }

    #[test]
    fn test_mission_shape() {
        let graph = graph();
        let dict = Value::Object(mission_to_dict(graph.mission(3).unwrap(), &graph));

        assert_eq!(
            keys(&dict),
            vec!["id", "name", "planet", "planet_id", "scientist", "scientist_id"]
        );
        assert_eq!(
            keys(&dict["scientist"]),
            vec!["field_of_study", "id", "name"]
        );
        assert_eq!(
            keys(&dict["planet"]),
            vec!["distance_from_earth", "name", "nearest_star", "scientists"]
        );
        assert_eq!(
            keys(&dict["planet"]["scientists"][0]),
            vec!["field_of_study", "id", "name", "planets"]
        );
        assert_eq!(dict["planet"]["scientists"][0]["planets"][0]["id"], json!(2));
    }

    #[test]
    fn test_mission_with_dangling_reference_renders_null() {
        let graph = EntityGraph::new(
            Vec::new(),
            Vec::new(),
            vec![NewMission::new("Lost", Some(5), Some(6)).unwrap().with_id(1)],
        );
        let dict = mission_to_dict(graph.mission(1).unwrap(), &graph);
        assert_eq!(dict["scientist"], Value::Null);
        assert_eq!(dict["planet"], Value::Null);
    }
}
