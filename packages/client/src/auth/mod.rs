//! Authentication: credentials, scopes, challenges and schemes

pub mod basic;
pub mod challenge;
pub mod credentials;
pub mod registry;
pub mod scheme;
pub mod scope;
pub mod state;

pub use basic::{BasicScheme, basic_auth, decode_basic_auth};
pub use challenge::{AuthChallenge, ChallengeTarget};
pub use credentials::{Credentials, TokenCredentials, UsernamePasswordCredentials};
pub use registry::AuthSchemeRegistry;
pub use scheme::{AuthScheme, UnsupportedScheme};
pub use scope::AuthScope;
pub use state::AuthState;
