/// Identifying `User-Agent` sent with every upstream request.
pub const DEFAULT_USER_AGENT: &str = "stock-api-project";

pub fn get_user_agent() -> &'static str {
    DEFAULT_USER_AGENT
}
