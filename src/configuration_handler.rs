use std::path::PathBuf;

use crate::configuration::Configuration;
use crate::store::BoxNumberOrdering;

#[derive(Clone)]
pub struct ConfigurationHandler;

impl Configuration for ConfigurationHandler {
    fn storage_path(&self) -> PathBuf {
        PathBuf::from("entries.json")
    }

    fn box_number_ordering(&self) -> BoxNumberOrdering {
        BoxNumberOrdering::Lexicographic
    }
}
