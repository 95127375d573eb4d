pub mod crm_token;
