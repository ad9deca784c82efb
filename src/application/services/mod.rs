pub mod model_catalog;
pub mod relay;
pub mod selection;

pub use model_catalog::ModelCatalog;
pub use relay::{RelayPacing, RelayStep};
