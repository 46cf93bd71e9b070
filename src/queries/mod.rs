pub mod ddl;
pub mod episodes;
pub mod podcasts;
