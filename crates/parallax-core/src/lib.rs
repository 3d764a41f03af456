pub mod constants;
pub mod layer;
pub mod load;
pub mod pointer;
pub mod scene;
pub mod tilt;
pub mod tween;

pub use constants::*;
pub use layer::*;
pub use load::*;
pub use pointer::*;
pub use scene::*;
pub use tilt::*;
pub use tween::*;
