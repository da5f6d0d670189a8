pub mod cart;
pub mod ids;
pub mod macros;
pub mod schedule;
pub mod section;

pub use cart::*;
pub use ids::*;
pub use schedule::*;
pub use section::*;
