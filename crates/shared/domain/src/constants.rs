//! Domain-level constants.
//!
//! Client-facing message texts. They are part of the public contract, so
//! handlers and validators must reference these instead of inlining strings.

// =============================================================================
// Users
// =============================================================================

pub const USER_MISSING_DATA: &str = "Missing user data!";
pub const USER_MISSING_NAME: &str = "Missing required \"name\" field!";
pub const USER_INVALID_ID: &str = "Invalid user ID";
pub const USER_ID_LOOKUP_FAILED: &str = "Error validating user ID";
pub const USER_NOT_FOUND: &str = "User not found";
pub const USER_GONE: &str = "The user could not be found";
pub const USER_DELETED: &str = "The user has been deleted";

pub const USER_ADD_FAILED: &str = "Error adding the user";
pub const USER_LIST_FAILED: &str = "Error retrieving the users";
pub const USER_GET_FAILED: &str = "Error retrieving the user";
pub const USER_UPDATE_FAILED: &str = "Error updating the user";
pub const USER_REMOVE_FAILED: &str = "Error removing the user";
pub const USER_POSTS_FAILED: &str = "Error getting the posts for the user";
pub const USER_POST_ADD_FAILED: &str = "Error adding the post for the user";

// =============================================================================
// Posts
// =============================================================================

pub const POST_MISSING_DATA: &str = "Missing post data!";
pub const POST_MISSING_TEXT: &str = "Missing required \"text\" field!";
pub const POST_INVALID_ID: &str = "Invalid Post ID";
pub const POST_ID_LOOKUP_FAILED: &str = "Error validating Post ID";
pub const POST_NOT_FOUND: &str = "Post not found";
pub const POST_GONE: &str = "The post could not be found";
pub const POST_DELETED: &str = "The post has been deleted";

pub const POST_LIST_FAILED: &str = "Error retrieving the posts";
pub const POST_GET_FAILED: &str = "Error retrieving the post";
pub const POST_UPDATE_FAILED: &str = "Error updating the post";
pub const POST_REMOVE_FAILED: &str = "Error removing the post";

// =============================================================================
// Storage limits
// =============================================================================

/// Maximum length of a user name column
pub const MAX_NAME_LENGTH: u32 = 128;
