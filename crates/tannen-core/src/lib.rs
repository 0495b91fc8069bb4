pub mod animate;
pub mod camera;
pub mod constants;
pub mod gesture;
pub mod hand;
pub mod particles;
pub mod photos;
pub mod scene;
pub mod session;
pub mod store;

pub use animate::*;
pub use camera::*;
pub use constants::*;
pub use gesture::*;
pub use hand::*;
pub use particles::*;
pub use photos::*;
pub use scene::*;
pub use session::*;
pub use store::*;
