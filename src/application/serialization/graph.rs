//! Entity Graph - 关系解析
//!
//! 实体只持有外键 id；这里按 id 解析 Scientist / Planet / Mission 之间的关联，
//! 不构造循环引用的对象图

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{Mission, Planet, Scientist};

/// 某一时刻三张表的只读快照
#[derive(Debug, Clone, Default)]
pub struct EntityGraph {
    scientists: BTreeMap<i64, Scientist>,
    planets: BTreeMap<i64, Planet>,
    missions: BTreeMap<i64, Mission>,
}

impl EntityGraph {
    pub fn new(scientists: Vec<Scientist>, planets: Vec<Planet>, missions: Vec<Mission>) -> Self {
        Self {
            scientists: scientists.into_iter().map(|s| (s.id(), s)).collect(),
            planets: planets.into_iter().map(|p| (p.id(), p)).collect(),
            missions: missions.into_iter().map(|m| (m.id(), m)).collect(),
        }
    }

    pub fn scientist(&self, id: i64) -> Option<&Scientist> {
        self.scientists.get(&id)
    }

    pub fn planet(&self, id: i64) -> Option<&Planet> {
        self.planets.get(&id)
    }

    pub fn mission(&self, id: i64) -> Option<&Mission> {
        self.missions.get(&id)
    }

    /// 所有科学家（按 id 排序）
    pub fn scientists(&self) -> impl Iterator<Item = &Scientist> {
        self.scientists.values()
    }

    /// 所有行星（按 id 排序）
    pub fn planets(&self) -> impl Iterator<Item = &Planet> {
        self.planets.values()
    }

    /// 科学家的任务（按任务 id 排序）
    pub fn missions_of_scientist(&self, scientist_id: i64) -> Vec<&Mission> {
        self.missions
            .values()
            .filter(|m| m.scientist_id() == scientist_id)
            .collect()
    }

    /// 行星的任务（按任务 id 排序）
    pub fn missions_of_planet(&self, planet_id: i64) -> Vec<&Mission> {
        self.missions
            .values()
            .filter(|m| m.planet_id() == planet_id)
            .collect()
    }

    /// 通过任务关联的行星，去重，按首个关联任务的顺序
    pub fn planets_of_scientist(&self, scientist_id: i64) -> Vec<&Planet> {
        let mut seen = BTreeSet::new();
        self.missions_of_scientist(scientist_id)
            .into_iter()
            .filter(|m| seen.insert(m.planet_id()))
            .filter_map(|m| self.planet(m.planet_id()))
            .collect()
    }

    /// 通过任务关联的科学家，去重，按首个关联任务的顺序
    pub fn scientists_of_planet(&self, planet_id: i64) -> Vec<&Scientist> {
        let mut seen = BTreeSet::new();
        self.missions_of_planet(planet_id)
            .into_iter()
            .filter(|m| seen.insert(m.scientist_id()))
            .filter_map(|m| self.scientist(m.scientist_id()))
            .collect()
    }
}
