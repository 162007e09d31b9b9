//! Board domain types

use serde::{Deserialize, Serialize};

/// A board: a named collection of saved queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub column_layout: Option<String>,
    #[serde(default)]
    pub queries: Vec<BoardQuery>,
    #[serde(default)]
    pub links: Option<BoardLinks>,
}

/// A query pinned to a board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardQuery {
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub query_id: Option<String>,
    #[serde(default)]
    pub dataset: Option<String>,
    #[serde(default)]
    pub query_style: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardLinks {
    #[serde(default)]
    pub board_url: Option<String>,
}
