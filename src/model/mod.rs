/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Authentication models: users, sessions and login/register responses
pub mod auth;
/// Low-level HTTP helpers shared by the session and API clients
pub mod http;
/// Request bodies sent to the platform API
pub mod requests;
/// Response bodies returned by the platform API
pub mod responses;
