//! Planet Context - Aggregate Root

/// 待持久化的行星
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    name: Option<String>,
    distance_from_earth: Option<i64>,
    nearest_star: Option<String>,
}

impl NewPlanet {
    pub fn new(
        name: impl Into<String>,
        distance_from_earth: i64,
        nearest_star: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            distance_from_earth: Some(distance_from_earth),
            nearest_star: Some(nearest_star.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn distance_from_earth(&self) -> Option<i64> {
        self.distance_from_earth
    }

    pub fn nearest_star(&self) -> Option<&str> {
        self.nearest_star.as_deref()
    }

    pub fn with_id(self, id: i64) -> Planet {
        Planet {
            id,
            name: self.name,
            distance_from_earth: self.distance_from_earth,
            nearest_star: self.nearest_star,
        }
    }
}

/// Planet 聚合根
///
/// 除 id 外所有字段都可为空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    id: i64,
    name: Option<String>,
    distance_from_earth: Option<i64>,
    nearest_star: Option<String>,
}

impl Planet {
    pub fn restore(
        id: i64,
        name: Option<String>,
        distance_from_earth: Option<i64>,
        nearest_star: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            distance_from_earth,
            nearest_star,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn distance_from_earth(&self) -> Option<i64> {
        self.distance_from_earth
    }

    pub fn nearest_star(&self) -> Option<&str> {
        self.nearest_star.as_deref()
    }
}
