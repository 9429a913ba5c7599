// Value-level request plumbing; nothing here opens a connection.
pub mod headers;
pub mod settings;
pub mod token;
pub mod uri;

/// Mask a secret for safe display (keeps last 4 chars).
pub(crate) fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 8 {
        "***".into()
    } else {
        let tail: String = secret.chars().skip(count - 4).collect();
        format!("***{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "***");
        assert_eq!(mask_secret("12345678"), "***");
        assert_eq!(mask_secret("123456789"), "***6789");
    }
}
