/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

/// User agent string sent with every request
pub const USER_AGENT: &str = "edu-client/0.1.0";
/// Storage key holding the bearer token
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Storage key holding the serialized user record
pub const USER_KEY: &str = "user";
/// Default base URL of the platform API
pub const DEFAULT_API_BASE_URL: &str = "https://your-api.com/api";
/// Default request timeout in milliseconds (10 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Default navigation target after logout
pub const DEFAULT_SITE_URL: &str = "/";
/// Default location of the durable session file
pub const DEFAULT_SESSION_FILE: &str = ".edu-client/session.json";
/// First page of paginated review listings
pub const DEFAULT_REVIEWS_PAGE: u32 = 1;
/// JSON content type used for every request body
pub const JSON_CONTENT_TYPE: &str = "application/json";
