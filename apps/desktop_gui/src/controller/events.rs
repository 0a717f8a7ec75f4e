//! UI/backend events, user actions, and error modeling for the storefront shell.

use shared::{
    domain::{CategoryId, Plant, PlantId, RawCategory},
    error::{CatalogError, ErrorCode},
};
use storefront::RequestToken;

pub enum UiEvent {
    CategoriesLoaded(Vec<RawCategory>),
    PlantsLoaded {
        token: RequestToken,
        result: Result<Vec<Plant>, CatalogError>,
    },
    Error(UiError),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::CategoriesLoaded(_) => "categories_loaded",
            UiEvent::PlantsLoaded { .. } => "plants_loaded",
            UiEvent::Error(_) => "error",
        }
    }
}

/// Intents collected while painting a frame and applied after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SelectCategory(CategoryId),
    AddToCart(PlantId),
    RemoveFromCart(PlantId),
    OpenDetail(PlantId),
    CloseDetail,
    SubmitPledge,
    DismissPledgeNotice,
    DismissError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Server,
    MalformedResponse,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Categories,
    Plants,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_catalog(context: UiErrorContext, err: &CatalogError) -> Self {
        let category = match err.code() {
            ErrorCode::RequestFailed => UiErrorCategory::Server,
            ErrorCode::Transport => UiErrorCategory::Transport,
            ErrorCode::Decode => UiErrorCategory::MalformedResponse,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Unknown,
            context,
            message: message.into(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line text for the status banner.
    pub fn banner_text(&self) -> String {
        let what = match self.context {
            UiErrorContext::BackendStartup => "Catalog worker failed to start",
            UiErrorContext::Categories => "Could not load categories",
            UiErrorContext::Plants => "Could not load plants",
        };
        let hint = match self.category {
            UiErrorCategory::Transport => "check your network connection and retry.",
            UiErrorCategory::Server => "the catalog service returned an error; retry later.",
            UiErrorCategory::MalformedResponse => "the catalog sent an unreadable response.",
            UiErrorCategory::Unknown => "see logs for details.",
        };
        format!("{what}: {hint}")
    }
}
