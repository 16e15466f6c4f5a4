//! Planet Queries

/// 列出所有行星查询
#[derive(Debug, Clone)]
pub struct ListPlanets;
