use super::*;
use curve::bignum;
use curve::{Fr, N};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

// Key and nonce material for the fixed end-to-end scenario.
const SEC_HEX: &str = "83ecb3984a4f9ff03e84d5f9c0d7f888a81833643047acc58eb6431e01d9bac8";
const NONCE_HEX: &str = "8afa4a162b7bad6c92ff14f3a8bf4db0f3c39e90c06f937861f823d2995c74f0";

#[test]
fn test_sign_verify() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = sk.verifying_key();
    let nonce: [u8; 32] = rng.random();

    let sig = sk.sign(b"hello ecdsa", &nonce).expect("sign");
    assert!(vk.verify(b"hello ecdsa", &sig));
}

#[test]
fn test_verify_rejects_wrong_message() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = sk.verifying_key();
    let nonce: [u8; 32] = rng.random();

    let sig = sk.sign(b"pay alice 10", &nonce).expect("sign");
    assert!(!vk.verify(b"pay alice 11", &sig));
}

#[test]
fn test_verify_rejects_wrong_key() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let nonce: [u8; 32] = rng.random();
    let sig = sk.sign(b"hello", &nonce).expect("sign");

    let other = SigningKey::random(&mut rng);
    assert!(!other.verifying_key().verify(b"hello", &sig));
}

#[test]
fn test_sha256_anchor() {
    let digest = Sha256::digest(b"hello");
    assert_eq!(
        hex::encode(digest),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

#[test]
fn test_fixed_vector_end_to_end() {
    let sec = hex::decode(SEC_HEX).unwrap();
    let nonce = hex::decode(NONCE_HEX).unwrap();

    let sk = SigningKey::from_bytes(&sec).expect("secret in range");
    // This secret is already below n, so the reduction is the identity.
    assert_eq!(hex::encode(sk.to_bytes()), SEC_HEX);

    let vk = sk.verifying_key();
    let sig = sk.sign(b"hello", &nonce).expect("sign");

    assert!(!sig.s.is_high(), "engine output must be low-S");
    assert!(vk.verify(b"hello", &sig));

    // Prehashed path agrees with the raw-message path.
    let digest: [u8; 32] = Sha256::digest(b"hello").into();
    let sig2 = sk.sign_prehashed(&digest, &nonce).expect("sign");
    assert_eq!(sig, sig2);
    assert!(vk.verify_prehashed(&digest, &sig2));

    // DER round-trip is exact.
    let der = sig.to_der();
    assert!(der.len() <= MAX_DER_SIGNATURE_SIZE);
    assert_eq!(Signature::from_der(&der).expect("well-formed"), sig);
}

#[test]
fn test_signing_is_deterministic_given_nonce() {
    let sec = hex::decode(SEC_HEX).unwrap();
    let nonce = hex::decode(NONCE_HEX).unwrap();
    let sk = SigningKey::from_bytes(&sec).unwrap();

    let sig1 = sk.sign(b"same message", &nonce).unwrap();
    let sig2 = sk.sign(b"same message", &nonce).unwrap();
    assert_eq!(sig1, sig2);
}

#[test]
fn test_tampered_digest_fails() {
    let mut rng = StdRng::seed_from_u64(7);
    let sk = SigningKey::random(&mut rng);
    let vk = sk.verifying_key();
    let nonce: [u8; 32] = rng.random();

    let digest: [u8; 32] = Sha256::digest(b"ledger entry").into();
    let sig = sk.sign_prehashed(&digest, &nonce).unwrap();
    assert!(vk.verify_prehashed(&digest, &sig));

    for i in 0..digest.len() {
        let mut tampered = digest;
        tampered[i] ^= 0x01;
        assert!(!vk.verify_prehashed(&tampered, &sig));
    }
}

#[test]
fn test_tampered_public_key_fails() {
    let mut rng = StdRng::seed_from_u64(7);
    let sk = SigningKey::random(&mut rng);
    let vk = sk.verifying_key();
    let nonce: [u8; 32] = rng.random();
    let sig = sk.sign(b"hello", &nonce).unwrap();

    // A flipped y bit no longer satisfies the curve equation, so the
    // tampered encoding is rejected at parse time.
    let mut bytes = vk.to_uncompressed_bytes();
    bytes[64] ^= 0x01;
    assert!(VerifyingKey::from_sec1_bytes(&bytes).is_err());

    // A different valid point (the negation) parses fine but does not
    // verify.
    let neg = VerifyingKey::from_point(vk.as_point().negate()).unwrap();
    assert!(!neg.verify(b"hello", &sig));
}

#[test]
fn test_high_s_is_rejected() {
    let mut rng = StdRng::seed_from_u64(11);
    let sk = SigningKey::random(&mut rng);
    let vk = sk.verifying_key();
    let nonce: [u8; 32] = rng.random();

    let sig = sk.sign(b"hello", &nonce).unwrap();
    assert!(vk.verify(b"hello", &sig));

    // The mirrored signature satisfies the raw equation but is
    // non-canonical.
    let high = Signature::new(sig.r.clone(), -sig.s.clone());
    assert!(high.s.is_high());
    assert!(!vk.verify(b"hello", &high));

    // Normalization restores the canonical form.
    assert_eq!(high.normalize(), sig);
}

#[test]
fn test_verify_rejects_zero_components() {
    let mut rng = StdRng::seed_from_u64(11);
    let sk = SigningKey::random(&mut rng);
    let vk = sk.verifying_key();
    let nonce: [u8; 32] = rng.random();
    let sig = sk.sign(b"hello", &nonce).unwrap();

    let zero_r = Signature::new(Fr::zero(), sig.s.clone());
    assert!(!vk.verify(b"hello", &zero_r));

    let zero_s = Signature::new(sig.r.clone(), Fr::zero());
    assert!(!vk.verify(b"hello", &zero_s));
}

#[test]
fn test_zero_secret_key_rejected() {
    assert_eq!(
        SigningKey::from_bytes(&[0u8; 32]),
        Err(EcdsaError::ZeroScalar)
    );
    // Bytes equal to the group order reduce to zero.
    let n_bytes = bignum::encode_be(&N);
    assert_eq!(
        SigningKey::from_bytes(&n_bytes),
        Err(EcdsaError::ZeroScalar)
    );
    assert_eq!(SigningKey::from_bytes(&[]), Err(EcdsaError::ZeroScalar));
}

#[test]
fn test_zero_nonce_rejected() {
    let sk = SigningKey::from_bytes(&hex::decode(SEC_HEX).unwrap()).unwrap();
    assert_eq!(
        sk.sign(b"hello", &[0u8; 32]),
        Err(EcdsaError::ZeroScalar)
    );
    let n_bytes = bignum::encode_be(&N);
    assert_eq!(sk.sign(b"hello", &n_bytes), Err(EcdsaError::ZeroScalar));
}

#[test]
fn test_secret_key_reduction() {
    // Input longer than 32 bytes is accepted and reduced.
    let mut long = vec![0u8; 40];
    long[39] = 5;
    let sk = SigningKey::from_bytes(&long).unwrap();
    assert_eq!(sk.as_scalar(), &Fr::from_u64(5));
}

#[test]
fn test_sec1_roundtrips() {
    let mut rng = StdRng::seed_from_u64(3);
    let vk = SigningKey::random(&mut rng).verifying_key();

    let uncompressed = vk.to_uncompressed_bytes();
    assert_eq!(uncompressed.len(), UNCOMPRESSED_PUBLIC_KEY_SIZE);
    assert_eq!(VerifyingKey::from_sec1_bytes(&uncompressed).unwrap(), vk);

    let compressed = vk.to_compressed_bytes();
    assert_eq!(compressed.len(), COMPRESSED_PUBLIC_KEY_SIZE);
    assert_eq!(VerifyingKey::from_sec1_bytes(&compressed).unwrap(), vk);
}

#[test]
fn test_sec1_rejects_bad_input() {
    let mut rng = StdRng::seed_from_u64(3);
    let vk = SigningKey::random(&mut rng).verifying_key();
    let uncompressed = vk.to_uncompressed_bytes();

    assert_eq!(
        VerifyingKey::from_sec1_bytes(&uncompressed[..64]),
        Err(EcdsaError::InvalidLength)
    );
    assert_eq!(
        VerifyingKey::from_sec1_bytes(&[]),
        Err(EcdsaError::InvalidLength)
    );

    let mut bad_tag = uncompressed;
    bad_tag[0] = 0x06;
    assert_eq!(
        VerifyingKey::from_sec1_bytes(&bad_tag),
        Err(EcdsaError::InvalidEncoding)
    );
}

#[test]
fn test_der_sign_padding() {
    // r = 2^255 has its top bit set and needs the 0x00 prefix byte;
    // s = 0x7f does not.
    let r = Fr::try_from_int(BigUint::from(1u8) << 255u32).unwrap();
    let s = Fr::from_u64(0x7f);
    let sig = Signature::new(r, s);

    let der = sig.to_der();
    assert_eq!(der[0], 0x30);
    assert_eq!(der[1] as usize, der.len() - 2);
    assert_eq!(&der[2..6], &[0x02, 33, 0x00, 0x80]);
    let s_field = &der[der.len() - 3..];
    assert_eq!(s_field, &[0x02, 0x01, 0x7f]);

    assert_eq!(Signature::from_der(&der).unwrap(), sig);
}

#[test]
fn test_der_rejects_malformed() {
    let mut rng = StdRng::seed_from_u64(5);
    let sk = SigningKey::random(&mut rng);
    let nonce: [u8; 32] = rng.random();
    let der = sk.sign(b"hello", &nonce).unwrap().to_der();

    assert_eq!(Signature::from_der(&[]), Err(EcdsaError::MalformedDer));
    assert_eq!(Signature::from_der(&der[..der.len() - 1]), Err(EcdsaError::MalformedDer));

    let mut bad_seq = der.clone();
    bad_seq[0] = 0x31;
    assert_eq!(Signature::from_der(&bad_seq), Err(EcdsaError::MalformedDer));

    let mut bad_len = der.clone();
    bad_len[1] ^= 0x01;
    assert_eq!(Signature::from_der(&bad_len), Err(EcdsaError::MalformedDer));

    let mut bad_int_tag = der.clone();
    bad_int_tag[2] = 0x03;
    assert_eq!(Signature::from_der(&bad_int_tag), Err(EcdsaError::MalformedDer));

    // Trailing garbage is not tolerated even when the outer length byte
    // is fixed up to cover it.
    let mut trailing = der.clone();
    trailing.push(0x00);
    trailing[1] += 1;
    assert_eq!(Signature::from_der(&trailing), Err(EcdsaError::MalformedDer));
}

#[test]
fn test_der_rejects_out_of_range_scalar() {
    // r = n is structurally valid DER but not a scalar.
    let n_bytes = bignum::encode_be(&N);
    let mut body = vec![0x02, 33, 0x00];
    body.extend_from_slice(&n_bytes);
    body.extend_from_slice(&[0x02, 0x01, 0x01]);
    let mut der = vec![0x30, body.len() as u8];
    der.extend_from_slice(&body);

    assert_eq!(Signature::from_der(&der), Err(EcdsaError::OutOfRange));
}
