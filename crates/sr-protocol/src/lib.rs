pub mod booking;
pub mod intent;
pub mod inventory;
pub mod turn;

pub use booking::*;
pub use intent::*;
pub use inventory::*;
pub use turn::*;
