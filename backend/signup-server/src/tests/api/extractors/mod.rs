mod id_param;
mod json_body;
