pub mod companies;
pub mod dashboard;
pub mod dispatch;
pub mod enrich;
pub mod find;
pub mod list;
pub mod note;
pub mod profile;
pub mod search;
pub mod serve;
pub mod shared;
