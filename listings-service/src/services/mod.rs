pub mod collections;
pub mod database;

pub use database::MongoDb;
