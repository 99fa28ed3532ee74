pub mod auth;
pub mod cart;
pub mod contact;
pub mod menu;
pub mod offer;
pub mod order;
pub mod review;
pub mod user;

mod router;
pub use router::get_router;
