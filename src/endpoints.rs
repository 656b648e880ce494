//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g. '/api/users/{user_id}', use
//! [format_endpoint].

/// The root route which serves the static UI page.
pub const ROOT: &str = "/";
/// The route to create a user.
pub const USERS: &str = "/api/users";
/// The route to fetch a single user.
pub const USER: &str = "/api/users/{user_id}";
/// The route to create a transaction.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to list the transactions created for a user.
pub const USER_TRANSACTIONS: &str = "/api/transactions/{user_id}";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the path parameter in `endpoint_path` with `id`.
///
/// Paths without a parameter are returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    match (endpoint_path.find('{'), endpoint_path.rfind('}')) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{id}{}", &endpoint_path[..start], &endpoint_path[end + 1..])
        }
        _ => endpoint_path.to_owned(),
    }
}
