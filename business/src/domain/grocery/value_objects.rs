use uuid::Uuid;

use super::errors::GroceryError;

/// Which half of the list a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroceryType {
    Bought,
    ToBuy,
}

impl GroceryType {
    /// Resolves the `type` query parameter. There is no default.
    pub fn resolve(raw: Option<&str>) -> Result<Self, GroceryError> {
        raw.ok_or(GroceryError::InvalidType)?.parse()
    }

    pub fn is_bought(&self) -> bool {
        matches!(self, GroceryType::Bought)
    }
}

impl std::fmt::Display for GroceryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroceryType::Bought => write!(f, "bought"),
            GroceryType::ToBuy => write!(f, "to-buy"),
        }
    }
}

impl std::str::FromStr for GroceryType {
    type Err = GroceryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bought" => Ok(GroceryType::Bought),
            "to-buy" => Ok(GroceryType::ToBuy),
            _ => Err(GroceryError::InvalidType),
        }
    }
}

/// Parses the `is_deleted` query parameter. Required, no default.
///
/// Accepts the usual boolean spellings: `1`, `t`, `T`, `true`, `TRUE`, `True`
/// and their false counterparts.
pub fn parse_deleted_flag(raw: Option<&str>) -> Result<bool, GroceryError> {
    match raw {
        Some("1" | "t" | "T" | "true" | "TRUE" | "True") => Ok(true),
        Some("0" | "f" | "F" | "false" | "FALSE" | "False") => Ok(false),
        Some(other) => Err(GroceryError::InvalidDeletedFlag(format!(
            "invalid boolean value for 'is_deleted': {:?}",
            other
        ))),
        None => Err(GroceryError::InvalidDeletedFlag(
            "missing 'is_deleted' query parameter".to_string(),
        )),
    }
}

/// Boolean predicates applied by list and count queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroceryFilter {
    pub bought: bool,
    pub deleted: bool,
}

impl GroceryFilter {
    pub fn new(grocery_type: GroceryType, deleted: bool) -> Self {
        Self {
            bought: grocery_type.is_bought(),
            deleted,
        }
    }

    /// Resolves both filter query parameters, type first.
    pub fn resolve(grocery_type: Option<&str>, is_deleted: Option<&str>) -> Result<Self, GroceryError> {
        let grocery_type = GroceryType::resolve(grocery_type)?;
        let deleted = parse_deleted_flag(is_deleted)?;
        Ok(Self::new(grocery_type, deleted))
    }
}

/// Format check only; existence is never verified here.
pub fn parse_grocery_id(raw: &str) -> Result<Uuid, GroceryError> {
    Uuid::parse_str(raw).map_err(|_| GroceryError::InvalidUuid)
}
