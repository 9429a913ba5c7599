pub mod sds;
