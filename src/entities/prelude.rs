pub use super::prices::Entity as Prices;
