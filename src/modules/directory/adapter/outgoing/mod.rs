pub mod directory_query_postgres;
pub mod directory_repository_postgres;
pub mod sea_orm_entity;
