mod cart;
mod checkout;
mod inventory;
mod login;

pub mod config;
pub mod flows;

pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use inventory::InventoryPage;
pub use login::LoginPage;
