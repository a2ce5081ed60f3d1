pub mod issue_token;
pub mod logout;
