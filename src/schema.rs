use crate::constants::{
    GROUP_A_IDENTIFIER_COLUMN, GROUP_A_PATH, GROUP_A_PORTRAIT_COLUMN, GROUP_B_IDENTIFIER_COLUMN,
    GROUP_B_PATH, NAME_COLUMN, PERCENTAGE_COLUMN,
};
use crate::domain::Group;

/// Maps the logical record fields onto one source file's header names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSchema {
    pub group: Group,
    pub path: String,
    pub identifier_column: &'static str,
    pub name_column: &'static str,
    pub percentage_column: &'static str,
    pub portrait_column: Option<&'static str>,
}

impl SourceSchema {
    pub fn group_a() -> Self {
        Self {
            group: Group::A,
            path: GROUP_A_PATH.to_string(),
            identifier_column: GROUP_A_IDENTIFIER_COLUMN,
            name_column: NAME_COLUMN,
            percentage_column: PERCENTAGE_COLUMN,
            portrait_column: Some(GROUP_A_PORTRAIT_COLUMN),
        }
    }

    pub fn group_b() -> Self {
        Self {
            group: Group::B,
            path: GROUP_B_PATH.to_string(),
            identifier_column: GROUP_B_IDENTIFIER_COLUMN,
            name_column: NAME_COLUMN,
            percentage_column: PERCENTAGE_COLUMN,
            portrait_column: None,
        }
    }

    pub fn for_group(group: Group) -> Self {
        match group {
            Group::A => Self::group_a(),
            Group::B => Self::group_b(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}
