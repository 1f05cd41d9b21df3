//! GetPedigreeFlat query handler.

use crate::domain::foundation::CommandMetadata;
use crate::domain::pedigree::{FlatPedigree, PedigreeError};

use super::{GetPedigreeHandler, GetPedigreeQuery};

pub type GetPedigreeFlatResult = Result<FlatPedigree, PedigreeError>;

/// Handler for pedigrees keyed by sire/dam path code (`S`, `D`, `DS`, ...).
pub struct GetPedigreeFlatHandler {
    tree: GetPedigreeHandler,
}

impl GetPedigreeFlatHandler {
    pub fn new(tree: GetPedigreeHandler) -> Self {
        Self { tree }
    }

    pub async fn handle(
        &self,
        query: GetPedigreeQuery,
        metadata: CommandMetadata,
    ) -> GetPedigreeFlatResult {
        let pedigree = self.tree.handle(query, metadata).await?;
        Ok(pedigree.flatten(self.tree.locale()))
    }
}
