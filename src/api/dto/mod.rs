pub mod data_query;
