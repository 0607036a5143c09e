use cfaccess::types::{PublicKeyError, SshPublicKey};
use cfaccess::AccessCaCertificate;

#[test]
fn test_parse_with_comment() {
    let key = SshPublicKey::parse(
        "ecdsa-sha2-nistp256 AAAAE2VjZHNhLXNoYTItbmlzdHAyNTY= open-ssh-ca@cloudflareaccess.org",
    )
    .unwrap();
    assert_eq!(key.algorithm(), "ecdsa-sha2-nistp256");
    assert_eq!(key.key(), "AAAAE2VjZHNhLXNoYTItbmlzdHAyNTY=");
    assert_eq!(key.comment(), Some("open-ssh-ca@cloudflareaccess.org"));
}

#[test]
fn test_parse_without_comment() {
    let key = SshPublicKey::parse("ssh-ed25519 AAAAC3NzaC1lZDI1NTE5\n").unwrap();
    assert_eq!(key.key(), "AAAAC3NzaC1lZDI1NTE5");
    assert_eq!(key.comment(), None);
}

#[test]
fn test_parse_comment_keeps_inner_spaces() {
    let key = SshPublicKey::parse("ssh-rsa AAAAB3NzaC1yc2E=   ops team  key").unwrap();
    assert_eq!(key.comment(), Some("ops team  key"));
}

#[test]
fn test_parse_errors() {
    assert_eq!(SshPublicKey::parse(""), Err(PublicKeyError::Empty));
    assert_eq!(SshPublicKey::parse("   \t"), Err(PublicKeyError::Empty));
    assert_eq!(
        SshPublicKey::parse("ssh-ed25519"),
        Err(PublicKeyError::MissingKey)
    );
    assert_eq!(
        SshPublicKey::parse("ssh-ed25519 AAAA...BBBB comment"),
        Err(PublicKeyError::InvalidKey)
    );
}

#[test]
fn test_display_normalizes_separators() {
    let key = SshPublicKey::parse("  ssh-ed25519\tAAAA   ca@example.org ").unwrap();
    assert_eq!(key.to_string(), "ssh-ed25519 AAAA ca@example.org");
}

#[test]
fn test_certificate_view_does_not_modify_key() {
    let cert = AccessCaCertificate {
        id: "id".into(),
        aud: "aud".into(),
        public_key: "ssh-ed25519 AAAA ca@example.org".into(),
    };
    let view = cert.ssh_public_key().unwrap();
    assert_eq!(view.to_string(), cert.public_key);
}
