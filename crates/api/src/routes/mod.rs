pub mod admin;
pub mod health;
pub mod premium;
pub mod property;
pub mod user;
pub mod wishlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /properties                                  list, create
/// /properties/my-listings/{user_email}         owner's listings
/// /properties/{id}                             get, update
/// /properties/{id}/sold                        mark sold (PUT)
/// /properties/{id}/report                      file report (POST)
///
/// /wishlist                                    add (POST)
/// /wishlist/{user_email}                       list
/// /wishlist/{user_email}/{property_id}         check (GET), remove (DELETE)
///
/// /premium/purchase/initiate                   initiate purchase (POST)
/// /premium/purchase/complete                   complete purchase (POST)
/// /premium/activate                            direct activation (POST)
/// /premium/status/{user_email}                 premium status (GET)
///
/// /users/login                                 login upsert (POST)
/// /users/logout/{email}                        logout (POST)
/// /users/activity/{email}                      activity ping (POST)
///
/// /admin/users                                 list
/// /admin/users/{id}/status                     update status (PATCH)
/// /admin/properties                            list all statuses
/// /admin/properties/{id}/status                status override (PATCH)
/// /admin/properties/{id}                       hard delete (DELETE)
/// /admin/categories                            list, create
/// /admin/categories/{id}                       delete
/// /admin/reported-listings                     list
/// /admin/reported-listings/{id}/status         update status (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/properties", property::router())
        .nest("/wishlist", wishlist::router())
        .nest("/premium", premium::router())
        .nest("/users", user::router())
        .nest("/admin", admin::router())
}
