mod ids;
mod issue;

pub use ids::*;
pub use issue::*;
