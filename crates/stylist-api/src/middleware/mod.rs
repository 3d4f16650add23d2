pub mod function_key;
pub mod request_id;
