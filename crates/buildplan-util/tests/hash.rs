use buildplan_util::hash::sha256_bytes;

#[test]
fn test_sha256_known_vector() {
    assert_eq!(
        sha256_bytes(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_sha256_is_stable() {
    assert_eq!(sha256_bytes(b"plan"), sha256_bytes(b"plan"));
    assert_ne!(sha256_bytes(b"plan"), sha256_bytes(b"plan2"));
}
