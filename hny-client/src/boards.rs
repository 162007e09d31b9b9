//! Board-related API endpoints

use crate::HoneycombClient;
use crate::error::Result;
use hny_core::domain::board::Board;
use reqwest::Method;

impl HoneycombClient {
    /// List all boards
    pub async fn list_boards(&self) -> Result<Vec<Board>> {
        let response = self.v1(Method::GET, &["boards"])?.send().await?;

        self.handle_response(response).await
    }

    /// Get a board by ID
    ///
    /// # Arguments
    /// * `board_id` - The board ID
    pub async fn get_board(&self, board_id: &str) -> Result<Board> {
        let response = self
            .v1(Method::GET, &["boards", board_id])?
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a board
    ///
    /// # Arguments
    /// * `board_id` - The board ID
    pub async fn delete_board(&self, board_id: &str) -> Result<()> {
        let response = self
            .v1(Method::DELETE, &["boards", board_id])?
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
