//! Known-answer tests for the ChaCha20 block function and its reduced-round
//! variants.
use chacha20_block::{R8, R12, block, block_with_rounds, key_words, nonce_words, to_le_bytes};
use hex_literal::hex;

//
// ChaCha20 block function test vector from:
// <https://datatracker.ietf.org/doc/html/rfc7539#section-2.3.2>
//

const KEY: [u32; 8] = [
    0x0302_0100,
    0x0706_0504,
    0x0b0a_0908,
    0x0f0e_0d0c,
    0x1312_1110,
    0x1716_1514,
    0x1b1a_1918,
    0x1f1e_1d1c,
];

const NONCE: [u32; 3] = [0x0900_0000, 0x4a00_0000, 0x0000_0000];

const OUTPUT: [u32; 16] = [
    0xe4e7_f110, 0x1559_3bd1, 0x1fdd_0f50, 0xc471_20a3, 0xc7f4_d1c7, 0x0368_c033, 0x9aaa_2204,
    0x4e6c_d4c3, 0x4664_82d2, 0x09aa_9f07, 0x05d7_c214, 0xa202_8bd9, 0xd19c_12b5, 0xb94e_16de,
    0xe883_d0cb, 0x4e3c_50a2,
];

const SERIALIZED: [u8; 64] = hex!(
    "
    10f1e7e4d13b5915500fdd1fa32071c4
    c7d1f4c733c068030422aa9ac3d46c4e
    d2826446079faa0914c2d705d98b02a2
    b5129cd1de164eb9cbd083e8a2503c4e
    "
);

#[test]
fn rfc7539_block_words() {
    assert_eq!(block(KEY, NONCE, 1), OUTPUT);
}

#[test]
fn rfc7539_block_bytes() {
    assert_eq!(to_le_bytes(block(KEY, NONCE, 1)), SERIALIZED);
}

#[test]
fn rfc7539_block_from_bytes() {
    let key = key_words(&hex!(
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"
    ))
    .unwrap();
    let nonce = nonce_words(&hex!("000000090000004a00000000")).unwrap();

    assert_eq!(key, KEY);
    assert_eq!(nonce, NONCE);
    assert_eq!(block(key, nonce, 1), OUTPUT);
}

//
// ChaCha20 keystream from:
// <https://datatracker.ietf.org/doc/html/rfc8439#section-2.4.2>
//
// The encryption example starts at counter 1, so the first 114 bytes of
// keystream are the serialized blocks for counters 1 and 2.
//

#[test]
fn rfc8439_keystream() {
    const KEYSTREAM: [u8; 114] = hex!(
        "
        224f51f3401bd9e12fde276fb8631ded8c131f823d2c06
        e27e4fcaec9ef3cf788a3b0aa372600a92b57974cded2b
        9334794cba40c63e34cdea212c4cf07d41b769a6749f3f
        630f4122cafe28ec4dc47e26d4346d70b98c73f3e9c53a
        c40c5945398b6eda1a832c89c167eacd901d7e2bf363
        "
    );

    let nonce = nonce_words(&hex!("000000000000004a00000000")).unwrap();

    let mut keystream = [0u8; 128];
    for (chunk, counter) in keystream.chunks_exact_mut(64).zip(1..) {
        chunk.copy_from_slice(&to_le_bytes(block(KEY, nonce, counter)));
    }

    assert_eq!(&keystream[..114], &KEYSTREAM[..]);
}

//
// Test vectors 1, 2 and 3 from:
// <https://tools.ietf.org/html/draft-nir-cfrg-chacha20-poly1305-04>
//

#[test]
fn zero_key_blocks() {
    assert_eq!(
        block([0; 8], [0; 3], 0),
        [
            0xade0_b876, 0x903d_f1a0, 0xe56a_5d40, 0x28bd_8653, 0xb819_d2bd, 0x1aed_8da0,
            0xccef_36a8, 0xc70d_778b, 0x7c59_41da, 0x8d48_5751, 0x3fe0_2477, 0x374a_d8b8,
            0xf4b8_436a, 0x1ca1_1815, 0x69b6_87c3, 0x8665_eeb2,
        ]
    );
    assert_eq!(
        block([0; 8], [0; 3], 1),
        [
            0xbee7_079f, 0x7a38_5155, 0x7c97_ba98, 0x0d08_2d73, 0xa029_0fcb, 0x6965_e348,
            0x3e53_c612, 0xed7a_ee32, 0x7621_b729, 0x434e_e69c, 0xb033_71d5, 0xd539_d874,
            0x281f_ed31, 0x45fb_0a51, 0x1f0a_e1ac, 0x6f4d_794b,
        ]
    );
}

#[test]
fn last_key_bit_set() {
    let key = key_words(&hex!(
        "0000000000000000000000000000000000000000000000000000000000000001"
    ))
    .unwrap();

    assert_eq!(
        block(key, [0; 3], 1),
        [
            0x2452_eb3a, 0x9249_f8ec, 0x8d82_9d9b, 0xddd4_ceb1, 0xe825_2083, 0x6081_8b01,
            0xf384_22b8, 0x5aaa_49c9, 0xbb00_ca8e, 0xda3b_a7b4, 0xc4b5_92d1, 0xfdf2_732f,
            0x4436_274e, 0x2561_b3c8, 0xebdd_4aa6, 0xa013_6c00,
        ]
    );
}

//
// Reduced-round variants, all-zero key and nonce, counter 0
//

#[test]
fn chacha8_zero_key() {
    assert_eq!(
        to_le_bytes(block_with_rounds::<R8>([0; 8], [0; 3], 0)),
        hex!(
            "
            3e00ef2f895f40d67f5bb8e81f09a5a12c840ec3ce9a7f3b181be188ef711a1e
            984ce172b9216f419f445367456d5619314a42a3da86b001387bfdb80e0cfe42
            "
        )
    );
}

#[test]
fn chacha12_zero_key() {
    assert_eq!(
        to_le_bytes(block_with_rounds::<R12>([0; 8], [0; 3], 0)),
        hex!(
            "
            9bf49a6a0755f953811fce125f2683d50429c3bb49e074147e0089a52eae155f
            0564f879d27ae3c02ce82834acfa8c793a629f2ca0de6919610be82f411326be
            "
        )
    );
}
