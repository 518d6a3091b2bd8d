pub mod card;
pub mod price;
pub mod sub;

pub use card::*;
pub use price::*;
pub use sub::*;
