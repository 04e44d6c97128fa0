use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Header carrying the admin secret.
pub const ADMIN_HEADER: &str = "x-admin-password";

/// Decides whether a presented credential grants admin access.
pub trait Authenticator: Send + Sync {
    fn verify(&self, presented: Option<&str>) -> bool;
}

/// Single shared password, kept only as a digest.
///
/// Both sides are hashed before comparison so the check takes the same time
/// regardless of where the inputs differ or how long they are.
pub struct SharedSecret {
    digest: [u8; 32],
}

impl SharedSecret {
    pub fn new(secret: &str) -> Self {
        SharedSecret {
            digest: Sha256::digest(secret.as_bytes()).into(),
        }
    }
}

impl Authenticator for SharedSecret {
    fn verify(&self, presented: Option<&str>) -> bool {
        let Some(presented) = presented else {
            return false;
        };
        let candidate: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        candidate[..].ct_eq(&self.digest[..]).into()
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}
