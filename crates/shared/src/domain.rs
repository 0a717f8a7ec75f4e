use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(CategoryId);
id_newtype!(PlantId);

/// Id of the pseudo-category that disables filtering.
pub const ALL_CATEGORY_ID: &str = "all";

impl CategoryId {
    pub fn all() -> Self {
        Self(ALL_CATEGORY_ID.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_CATEGORY_ID
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
}

/// Field-complete plant record used by rendering and the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub description: String,
    pub category: String,
}

/// Category as reported by the remote API, before a display label is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    pub id: CategoryId,
    pub name: Option<String>,
}
