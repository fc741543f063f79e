use crate::DomainResult;

pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> DomainResult<String>;
    fn verify_password(&self, password: &str, hash: &str) -> bool;
}
