//! Mission Context - Aggregate Root

use crate::domain::validation::{validate_foreign_key, validate_name, ValidationError};

/// 待持久化的任务
///
/// 不变量:
/// - name 去除空白后非空
/// - scientist_id / planet_id 必填且非 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMission {
    name: String,
    scientist_id: i64,
    planet_id: i64,
}

impl NewMission {
    pub fn new(
        name: impl Into<String>,
        scientist_id: Option<i64>,
        planet_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?,
            scientist_id: validate_foreign_key("scientist_id", scientist_id)?,
            planet_id: validate_foreign_key("planet_id", planet_id)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scientist_id(&self) -> i64 {
        self.scientist_id
    }

    pub fn planet_id(&self) -> i64 {
        self.planet_id
    }

    pub fn with_id(self, id: i64) -> Mission {
        Mission {
            id,
            name: self.name,
            scientist_id: self.scientist_id,
            planet_id: self.planet_id,
        }
    }
}

/// Mission 聚合根
///
/// 只持有外键 id，关联实体通过仓储按 id 解析
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    id: i64,
    name: String,
    scientist_id: i64,
    planet_id: i64,
}

impl Mission {
    pub fn restore(id: i64, name: String, scientist_id: i64, planet_id: i64) -> Self {
        Self {
            id,
            name,
            scientist_id,
            planet_id,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scientist_id(&self) -> i64 {
        self.scientist_id
    }

    pub fn planet_id(&self) -> i64 {
        self.planet_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_creation() {
        let mission = NewMission::new("Apollo", Some(1), Some(2)).unwrap().with_id(9);
        assert_eq!(mission.id(), 9);
        assert_eq!(mission.name(), "Apollo");
        assert_eq!(mission.scientist_id(), 1);
        assert_eq!(mission.planet_id(), 2);
    }

    #[test]
    fn test_mission_requires_foreign_keys() {
        let err = NewMission::new("Apollo", None, Some(2)).unwrap_err();
        assert_eq!(err.to_string(), "Scientist cannot be empty.");

        let err = NewMission::new("Apollo", Some(1), Some(0)).unwrap_err();
        assert_eq!(err.to_string(), "Planet cannot be empty.");
    }

    #[test]
    fn test_mission_rejects_blank_name() {
        let err = NewMission::new(" ", Some(1), Some(2)).unwrap_err();
        assert_eq!(err.to_string(), "Name cannot be empty.");
    }
}
