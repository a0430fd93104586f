//! End-to-end encryption flows across the workspace crates

use monecc_algorithms::{derive_key_material, Aes128Cbc, CurveGroup, Point};
use monecc_api::{Error, Serialize};
use monecc_pke::{Ecies, EciesConfig, EciesMessage, KeyPair, PrivateKey, PublicKey};
use monecc_tests::{seeded_source, ScriptedSource};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip_for_any_key_and_message(
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let ecies = Ecies::demo();
        let mut source = seeded_source(seed);
        let keys = ecies.generate_keypair(&mut source).unwrap();
        let sealed = ecies.encrypt(keys.public_key(), &plaintext, &mut source).unwrap();
        prop_assert_eq!(ecies.decrypt(keys.private_key(), &sealed).unwrap(), plaintext);
    }

    #[test]
    fn any_flipped_byte_is_detected(
        seed in any::<u64>(),
        position in any::<prop::sample::Index>(),
        flip in 1u8..=255
    ) {
        let ecies = Ecies::demo();
        let mut source = seeded_source(seed);
        let keys = ecies.generate_keypair(&mut source).unwrap();
        let sealed = ecies.encrypt(keys.public_key(), b"the quick brown fox", &mut source).unwrap();

        let (ephemeral, mut ciphertext) = sealed.into_parts();
        let i = position.index(ciphertext.len());
        ciphertext[i] ^= flip;
        let tampered = EciesMessage::new(ephemeral, ciphertext).unwrap();
        let result = ecies.decrypt(keys.private_key(), &tampered);
        prop_assert!(matches!(result, Err(Error::DecryptionFailed { .. })), "got {:?}", result);
    }
}

#[test]
fn sender_and_receiver_reach_the_same_secret() {
    let ecies = Ecies::demo();
    let group = ecies.group();
    // k = 3, r = 1: S = r·Q = 3G = (2, 92) and k·R = 3G as well
    let keys = KeyPair::from_private(group, PrivateKey::new(3).unwrap()).unwrap();
    let mut source = ScriptedSource::new(&[1]);
    let sealed = ecies.encrypt(keys.public_key(), b"hi", &mut source).unwrap();
    assert_eq!(source.remaining(), 0);
    assert_eq!(sealed.ephemeral(), group.generator());

    let shared = group.scalar_mul(&sealed.ephemeral(), 3).unwrap();
    assert_eq!(shared, Point::new(2, 92));
    assert!(derive_key_material(&shared).is_ok());
    assert_eq!(ecies.decrypt(keys.private_key(), &sealed).unwrap(), b"hi");
}

#[test]
fn compatible_envelope_for_plain_cbc() {
    let ecies =
        Ecies::with_cipher(CurveGroup::demo(), EciesConfig::default(), Aes128Cbc::new()).unwrap();
    let keys = KeyPair::from_private(ecies.group(), PrivateKey::new(5).unwrap()).unwrap();
    // 5G = G, so with r = 5 the shared point is again G = (2, 9)
    let sealed = ecies
        .encrypt_str(keys.public_key(), "hello", &mut ScriptedSource::new(&[5]))
        .unwrap();
    assert_eq!(sealed.to_string(), "2;9:goP3vkNF9hrJ36aIAgYkdg==");

    let bytes = sealed.to_bytes();
    assert_eq!(
        hex::encode(&bytes),
        "0000000000000002000000000000000982\
         83f7be4345f61ac9dfa68802062476"
    );
    let decoded = <EciesMessage as Serialize>::from_bytes(&bytes).unwrap();
    assert_eq!(ecies.decrypt_to_string(keys.private_key(), &decoded).unwrap(), "hello");
}

#[test]
fn text_envelope_survives_transport() {
    let ecies = Ecies::demo();
    let mut source = seeded_source(2024);
    let keys = ecies.generate_keypair(&mut source).unwrap();
    let text = ecies
        .encrypt_str(keys.public_key(), "meet me at the usual place", &mut source)
        .unwrap()
        .to_string();

    let received = EciesMessage::parse(ecies.group(), &format!("  {}\n", text)).unwrap();
    assert_eq!(
        ecies.decrypt_to_string(keys.private_key(), &received).unwrap(),
        "meet me at the usual place"
    );
}

#[test]
fn crafted_ephemeral_point_yields_invalid_shared_secret() {
    let ecies = Ecies::demo();
    let keys = KeyPair::from_private(ecies.group(), PrivateKey::new(6).unwrap()).unwrap();
    // 6·(21, 0) = O
    let crafted = EciesMessage::new(Point::new(21, 0), vec![0u8; 48]).unwrap();
    assert!(matches!(
        ecies.decrypt(keys.private_key(), &crafted),
        Err(Error::InvalidSharedSecret { .. })
    ));
}

#[test]
fn independent_schemes_do_not_interfere() {
    let small = CurveGroup::new(monecc_params::traditional::weierstrass::CurveParams {
        a: 2,
        b: 3,
        p: 97,
        g_x: 3,
        g_y: 6,
    })
    .unwrap();
    let small_ecies = Ecies::new(small, EciesConfig::default()).unwrap();
    let demo_ecies = Ecies::demo();
    let mut source = seeded_source(8);

    let small_keys = small_ecies.generate_keypair(&mut source).unwrap();
    let demo_keys = demo_ecies.generate_keypair(&mut source).unwrap();

    let sealed = small_ecies
        .encrypt(small_keys.public_key(), b"small curve", &mut source)
        .unwrap();
    assert_eq!(
        small_ecies.decrypt(small_keys.private_key(), &sealed).unwrap(),
        b"small curve"
    );

    // Keys of one curve are rejected by the other
    assert!(demo_ecies
        .encrypt(small_keys.public_key(), b"x", &mut source)
        .is_err());
    assert!(demo_ecies.group().contains(&demo_keys.public_key().point()));
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn shared_values_are_send_and_sync() {
    assert_send_sync::<Ecies>();
    assert_send_sync::<Ecies<Aes128Cbc>>();
    assert_send_sync::<CurveGroup>();
    assert_send_sync::<PublicKey>();
    assert_send_sync::<PrivateKey>();
    assert_send_sync::<KeyPair>();
    assert_send_sync::<EciesMessage>();
}

#[test]
fn one_scheme_serves_several_threads() {
    let ecies = Ecies::demo();
    let keys = ecies.generate_keypair(&mut seeded_source(17)).unwrap();

    std::thread::scope(|scope| {
        for seed in 0..4u64 {
            let (ecies, keys) = (&ecies, &keys);
            scope.spawn(move || {
                let mut source = seeded_source(seed);
                let text = format!("worker {}", seed);
                let sealed = ecies.encrypt_str(keys.public_key(), &text, &mut source).unwrap();
                assert_eq!(ecies.decrypt_to_string(keys.private_key(), &sealed).unwrap(), text);
            });
        }
    });
}
