//! Key pairs written to disk and read back by another party

use std::fs;
use std::path::PathBuf;

use monecc_api::{Error, SerializeSecret};
use monecc_pke::armor::{
    decode_public_key, encode_private_key, encode_public_key, load_private_key, load_public_key,
    save_keypair,
};
use monecc_pke::{Ecies, EciesMessage, PrivateKey};
use monecc_tests::seeded_source;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("monecc-keys-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn exchange_through_key_files() {
    let ecies = Ecies::demo();
    let dir = scratch_dir("exchange");
    let mut source = seeded_source(99);

    // Bob publishes his key pair
    let bob = ecies.generate_keypair(&mut source).unwrap();
    let (private_path, public_path) = save_keypair(dir.join("bob"), &bob).unwrap();

    // Alice only sees the public file
    let bob_public = load_public_key(ecies.group(), &public_path).unwrap();
    let sealed = ecies
        .encrypt_str(&bob_public, "see you at noon", &mut source)
        .unwrap()
        .to_string();

    // Bob reads his private key back to decrypt
    let bob_private = load_private_key(&private_path).unwrap();
    let message = EciesMessage::parse(ecies.group(), &sealed).unwrap();
    assert_eq!(
        ecies.decrypt_to_string(&bob_private, &message).unwrap(),
        "see you at noon"
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn armored_text_is_stable() {
    let ecies = Ecies::demo();
    let mut source = seeded_source(3);
    for _ in 0..20 {
        let pair = ecies.generate_keypair(&mut source).unwrap();
        let public_text = encode_public_key(pair.public_key());
        assert_eq!(
            &decode_public_key(ecies.group(), &public_text).unwrap(),
            pair.public_key()
        );
        let private_text = encode_private_key(pair.private_key());
        assert!(private_text.starts_with("---begin monECC private key---\n"));
        assert!(private_text.ends_with("---end monECC key---\n"));
    }
}

#[test]
fn corrupted_key_file_is_an_encoding_error() {
    let dir = scratch_dir("corrupt");
    let path = dir.join("broken.priv");
    fs::write(&path, "---begin monECC private key---\n%%%\n---end monECC key---\n").unwrap();
    assert!(matches!(
        load_private_key(&path),
        Err(Error::InvalidKeyEncoding { .. })
    ));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn secret_bytes_roundtrip() {
    let key = PrivateKey::new(777).unwrap();
    let bytes = key.to_bytes_zeroizing();
    let back = <PrivateKey as SerializeSecret>::from_bytes(&bytes).unwrap();
    assert_eq!(back, key);
}
