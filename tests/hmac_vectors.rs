//! RFC 2202 and RFC 4231 HMAC test vectors, plus the long-key law.

use fleet_hash::hash::{Md5, Sha1, Sha224, Sha256, Sha384, Sha512};
use fleet_hash::mac::hmac::hmac_hex;
use fleet_hash::mac::Hmac;

#[test]
fn rfc_2202_hmac_md5() {
    assert_eq!(
        hmac_hex::<Md5>(&[0x0b; 16], b"Hi There"),
        "9294727a3638bb1c13f48ef8158bfc9d"
    );
    assert_eq!(
        hmac_hex::<Md5>(b"Jefe", b"what do ya want for nothing?"),
        "750c783e6ab0b503eaa86e310a5db738"
    );
    assert_eq!(
        hmac_hex::<Md5>(&[0xaa; 16], &[0xdd; 50]),
        "56be34521d144c88dbb8c733f0e8b3f6"
    );
}

#[test]
fn rfc_2202_hmac_sha1() {
    assert_eq!(
        hmac_hex::<Sha1>(&[0x0b; 20], b"Hi There"),
        "b617318655057264e28bc0b6fb378c8ef146be00"
    );
    assert_eq!(
        hmac_hex::<Sha1>(b"Jefe", b"what do ya want for nothing?"),
        "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
    );
    assert_eq!(
        hmac_hex::<Sha1>(&[0xaa; 20], &[0xdd; 50]),
        "125d7342b9ac11cd91a39af48aa17b4f63f175d3"
    );
}

#[test]
fn rfc_4231_case_1() {
    let key = [0x0b; 20];
    let msg = b"Hi There";

    assert_eq!(
        hmac_hex::<Sha224>(&key, msg),
        "896fb1128abbdf196832107cd49df33f47b4b1169912ba4f53684b22"
    );
    assert_eq!(
        hmac_hex::<Sha256>(&key, msg),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
    assert_eq!(
        hmac_hex::<Sha384>(&key, msg),
        "afd03944d84895626b0825f4ab46907f15f9dadbe4101ec682aa034c7cebc59c\
         faea9ea9076ede7f4af152e8b2fa9cb6"
    );
    assert_eq!(
        hmac_hex::<Sha512>(&key, msg),
        "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
         daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854"
    );
}

#[test]
fn rfc_4231_case_2() {
    let key = b"Jefe";
    let msg = b"what do ya want for nothing?";

    assert_eq!(
        hmac_hex::<Sha256>(key, msg),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
    assert_eq!(
        hmac_hex::<Sha512>(key, msg),
        "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
         9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
    );
}

#[test]
fn oversized_keys_equal_their_digest() {
    // |K| > B must behave exactly like H(K)
    for key_len in [65usize, 100, 200] {
        let key: Vec<u8> = (0..key_len).map(|i| i as u8).collect();
        let collapsed = Sha256::hash(&key);

        assert_eq!(
            hmac_hex::<Sha256>(&key, b"message"),
            hmac_hex::<Sha256>(collapsed.as_bytes(), b"message"),
            "key length {key_len}"
        );
    }
}

#[test]
fn streaming_equals_one_shot() {
    let mut mac = Hmac::<Sha512>::new(b"key material");
    mac.update(b"what do ya want ").unwrap();
    mac.update(b"").unwrap();
    mac.update(b"for nothing?").unwrap();

    assert_eq!(
        mac.digest().unwrap().hex(),
        hmac_hex::<Sha512>(b"key material", b"what do ya want for nothing?")
    );
}

#[test]
fn reference_equivalence_across_all_capable_hashes() {
    use hmac::Mac as _;

    let key = b"an ordinary key";
    let msg = b"an ordinary message";

    macro_rules! check {
        ($ours:ty, $rc:ty) => {
            let mut rc = <hmac::Hmac<$rc>>::new_from_slice(key).unwrap();
            rc.update(msg);
            assert_eq!(
                hmac_hex::<$ours>(key, msg),
                hex::encode(rc.finalize().into_bytes())
            );
        };
    }

    check!(fleet_hash::hash::Md4, md4::Md4);
    check!(Md5, md5::Md5);
    check!(fleet_hash::hash::Ripemd160, ripemd::Ripemd160);
    check!(Sha1, sha1::Sha1);
    check!(Sha224, sha2::Sha224);
    check!(Sha256, sha2::Sha256);
    check!(Sha384, sha2::Sha384);
    check!(Sha512, sha2::Sha512);
    check!(fleet_hash::hash::Sha3_224, sha3::Sha3_224);
    check!(fleet_hash::hash::Sha3_256, sha3::Sha3_256);
    check!(fleet_hash::hash::Sha3_384, sha3::Sha3_384);
    check!(fleet_hash::hash::Sha3_512, sha3::Sha3_512);
    check!(fleet_hash::hash::Keccak224, sha3::Keccak224);
    check!(fleet_hash::hash::Keccak256, sha3::Keccak256);
    check!(fleet_hash::hash::Keccak384, sha3::Keccak384);
    check!(fleet_hash::hash::Keccak512, sha3::Keccak512);
}
