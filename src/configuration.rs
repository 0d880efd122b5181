use std::path::PathBuf;

use crate::store::BoxNumberOrdering;

pub trait Configuration: Clone + 'static {
    /// Where the durable blob lives.
    fn storage_path(&self) -> PathBuf;
    /// Which box-number comparison the collection is sorted with.
    fn box_number_ordering(&self) -> BoxNumberOrdering;
}
