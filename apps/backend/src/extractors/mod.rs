pub mod auth_token;
pub mod current_user;
pub mod todo_id;
pub mod validated_json;
pub mod validated_query;

pub use auth_token::AuthToken;
pub use current_user::CurrentUser;
pub use todo_id::TodoId;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
