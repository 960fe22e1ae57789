use ecdsa::{Signature, SigningKey, VerifyingKey};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    let msg = b"hello ecdsa";
    let nonce: [u8; 32] = rng.random();
    let sig = sk.sign(msg, &nonce).expect("sign");
    let der = sig.to_der();

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2 = Signature::from_der(&der).expect("decode der");

    let ok = vk2.verify(msg, &sig2);
    assert!(ok);

    let _ = sk2;
}
