mod group_query_postgres;
mod group_repository_postgres;
pub mod sea_orm_entity;

pub use group_query_postgres::GroupQueryPostgres;
pub use group_repository_postgres::GroupRepositoryPostgres;
