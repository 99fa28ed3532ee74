use sha2::Digest;

pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = sha2::Sha256::new();
    hasher.update(format!("{}:{}", salt, password));
    hex::encode(hasher.finalize())
}

pub fn verify_password(password: &str, salt: &str, password_hash: &str) -> bool {
    hash_password(password, salt) == password_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_password_and_salt_produce_the_same_hash() {
        let hash = hash_password("hunter2", "01J0000000000000000000AAAA");
        assert!(verify_password(
            "hunter2",
            "01J0000000000000000000AAAA",
            &hash
        ));
    }

    #[test]
    fn different_salts_produce_different_hashes() {
        let first = hash_password("hunter2", "salt-one");
        let second = hash_password("hunter2", "salt-two");
        assert_ne!(first, second);
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_password("hunter2", "salt");
        assert!(!verify_password("hunter3", "salt", &hash));
    }
}
