pub mod clock;
pub mod constants;
pub mod driver;
pub mod error;
pub mod follower;
pub mod params;
pub mod particles;
pub mod scene;
pub mod signals;
pub mod transition;

pub use clock::*;
pub use constants::*;
pub use driver::*;
pub use error::*;
pub use follower::*;
pub use params::*;
pub use particles::*;
pub use scene::*;
pub use signals::*;
pub use transition::*;
