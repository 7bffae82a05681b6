pub mod id_param;
pub mod json_body;
