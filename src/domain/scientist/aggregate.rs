//! Scientist Context - Aggregate Root

use crate::domain::validation::{validate_field_of_study, validate_name, ValidationError};

/// 待持久化的科学家（尚无 id）
///
/// 不变量:
/// - name / field_of_study 去除空白后非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScientist {
    name: String,
    field_of_study: String,
}

impl NewScientist {
    pub fn new(
        name: impl Into<String>,
        field_of_study: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?,
            field_of_study: validate_field_of_study(field_of_study)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_of_study(&self) -> &str {
        &self.field_of_study
    }

    /// 绑定数据库分配的 id
    pub fn with_id(self, id: i64) -> Scientist {
        Scientist {
            id,
            name: self.name,
            field_of_study: self.field_of_study,
        }
    }
}

/// Scientist 聚合根
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scientist {
    id: i64,
    name: String,
    field_of_study: String,
}

/// 部分更新
///
/// `None` 或空字符串表示不修改该字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScientistPatch {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

impl ScientistPatch {
    pub fn is_empty(&self) -> bool {
        provided(&self.name).is_none() && provided(&self.field_of_study).is_none()
    }
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Scientist {
    /// 从存储层恢复（数据已在写入时校验）
    pub fn restore(id: i64, name: String, field_of_study: String) -> Self {
        Self {
            id,
            name,
            field_of_study,
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_field_of_study(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.field_of_study = validate_field_of_study(value)?;
        Ok(())
    }

    /// 应用部分更新
    ///
    /// 任一字段校验失败时实体保持不变
    pub fn apply_patch(&mut self, patch: &ScientistPatch) -> Result<(), ValidationError> {
        let name = provided(&patch.name).map(validate_name).transpose()?;
        let field_of_study = provided(&patch.field_of_study)
            .map(validate_field_of_study)
            .transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(field_of_study) = field_of_study {
            self.field_of_study = field_of_study;
        }
        Ok(())
    }

    // Getters
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_of_study(&self) -> &str {
        &self.field_of_study
    }
}
