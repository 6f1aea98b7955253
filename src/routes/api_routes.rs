/**
 * API Route Configuration
 *
 * Protected resource endpoints: current-user info plus the user, post and
 * comment CRUD surface. The caller wraps the returned router with the
 * authentication middleware, so every handler here can assume a verified
 * access token.
 */

use axum::Router;

use crate::auth::get_me;
use crate::comments::handlers as comments;
use crate::posts::handlers as posts;
use crate::server::state::AppState;
use crate::users::handlers as users;

/// Configure the protected API routes
///
/// ## Current user
/// - `GET /auth/me` - Info about the authenticated user
///
/// ## Users
/// - `GET /user/data` - List users
/// - `POST /user` - Create a user
/// - `GET /user/{user_id}` / `PUT` / `DELETE` - Single-user operations
///
/// ## Posts
/// - `POST /post`, `GET /post/data`, `GET /post?sender=`,
///   `GET /post/{post_id}`, `PUT /post/{post_id}`
///
/// ## Comments
/// - `GET /comments/data`, `GET /comments?post_id=`, `POST /comments`,
///   `GET /comments/{comment_id}`, `PUT /comments/{comment_id}`
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Current user
        .route("/auth/me", axum::routing::get(get_me))
        // Users
        .route("/user/data", axum::routing::get(users::get_all_users))
        .route("/user", axum::routing::post(users::create_user))
        .route(
            "/user/{user_id}",
            axum::routing::get(users::get_user_by_id)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Posts
        .route(
            "/post",
            axum::routing::post(posts::add_post).get(posts::get_posts_by_sender),
        )
        .route("/post/data", axum::routing::get(posts::get_all_posts))
        .route(
            "/post/{post_id}",
            axum::routing::get(posts::get_post_by_id).put(posts::update_post),
        )
        // Comments
        .route("/comments/data", axum::routing::get(comments::get_all_comments))
        .route(
            "/comments",
            axum::routing::get(comments::get_comments_by_post).post(comments::create_comment),
        )
        .route(
            "/comments/{comment_id}",
            axum::routing::get(comments::get_comment_by_id).put(comments::update_comment),
        )
}
