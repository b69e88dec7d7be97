// Properties every backend must satisfy.
// Each test binary runs them against the backend it names in `crate::BACKEND`.

use anyhow::Result;
use bls::{
    functional::{self, SignatureSetArgs},
    CoordType, Error, PointFormat, PublicKey, PublicKeyBytes, SecretKey, Signature,
    SignatureBytes, SignatureSet, ValidationError,
};
use hex_literal::hex;
use itertools::Itertools as _;
use log::Level;
use test_case::test_case;

// Every test in a binary uses the same backend, so initializing it repeatedly is harmless.
fn init() {
    bls::init_blocking(crate::BACKEND).expect("backend should pass setup");
}

fn secret_key_from_seed(seed: u8) -> SecretKey {
    SecretKey::from_keygen(Some([seed; 32].as_slice())).expect("key material is long enough")
}

fn keypairs(count: u8) -> Result<Vec<(SecretKey, PublicKey)>> {
    (1..=count)
        .map(|seed| -> Result<_> {
            let secret_key = secret_key_from_seed(seed);
            let public_key = secret_key.to_public_key()?;
            Ok((secret_key, public_key))
        })
        .collect()
}

#[test]
fn signature_verifies_against_signer_and_message() -> Result<()> {
    init();

    let secret_key = secret_key_from_seed(1);
    let public_key = secret_key.to_public_key()?;
    let signature = secret_key.sign(b"message")?;

    assert_eq!(signature.backend(), crate::BACKEND);
    assert!(signature.verify(&public_key, b"message")?);
    assert!(!signature.verify(&public_key, b"other message")?);
    assert!(!signature.verify(&secret_key_from_seed(2).to_public_key()?, b"message")?);

    Ok(())
}

#[test]
fn zero_secret_key_is_rejected() {
    init();

    assert_eq!(
        SecretKey::from_bytes(&[0; 32]).map(|_| ()),
        Err(Error::Invalid(ValidationError::ZeroSecretKey)),
    );
}

#[test]
fn empty_aggregates_are_rejected() {
    init();

    let empty_aggregate = Err(Error::Invalid(ValidationError::EmptyAggregate));

    assert_eq!(PublicKey::aggregate(&[]).map(|_| ()), empty_aggregate);
    assert_eq!(Signature::aggregate(&[]).map(|_| ()), empty_aggregate);
    assert_eq!(
        functional::aggregate_public_keys(&[] as &[PublicKeyBytes]).map(|_| ()),
        empty_aggregate,
    );
}

#[test]
fn aggregation_is_order_independent() -> Result<()> {
    init();

    let signatures = keypairs(4)?
        .iter()
        .map(|(secret_key, _)| secret_key.sign(b"message"))
        .collect::<Result<Vec<_>, _>>()?;

    let expected = Signature::aggregate(&signatures)?.compress();

    for permutation in signatures.iter().copied().permutations(signatures.len()) {
        assert_eq!(Signature::aggregate(&permutation)?.compress(), expected);
    }

    Ok(())
}

#[test]
fn fast_aggregate_verification_detects_any_flipped_byte() -> Result<()> {
    init();

    let message = *b"attestation data";

    let (public_keys, signatures): (Vec<_>, Vec<_>) = keypairs(3)?
        .into_iter()
        .map(|(secret_key, public_key)| -> Result<_> {
            Ok((public_key, secret_key.sign(message)?))
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .unzip();

    let aggregate = Signature::aggregate(&signatures)?;

    assert!(aggregate.verify_aggregate(&public_keys, message)?);

    for index in 0..message.len() {
        let mut tampered = message;
        tampered[index] ^= 1;

        assert!(!aggregate.verify_aggregate(&public_keys, tampered)?);
    }

    Ok(())
}

#[test]
fn multi_message_verification_depends_on_pairing_order() -> Result<()> {
    init();

    let messages = [b"first".as_slice(), b"second", b"third"];

    let (public_keys, signatures): (Vec<_>, Vec<_>) = keypairs(3)?
        .into_iter()
        .zip(messages)
        .map(|((secret_key, public_key), message)| -> Result<_> {
            Ok((public_key, secret_key.sign(message)?))
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .unzip();

    let aggregate = Signature::aggregate(&signatures)?;

    assert!(aggregate.verify_multiple(&public_keys, &messages)?);

    let mut swapped = public_keys.clone();
    swapped.swap(0, 1);

    assert!(!aggregate.verify_multiple(&swapped, &messages)?);
    assert!(!aggregate.verify_multiple(&public_keys, &messages[..2])?);
    assert!(!aggregate.verify_multiple(&[], &[] as &[&[u8]])?);

    Ok(())
}

#[test_case(PointFormat::Compressed; "compressed")]
#[test_case(PointFormat::Uncompressed; "uncompressed")]
fn values_survive_serialization(format: PointFormat) -> Result<()> {
    init();

    let secret_key = secret_key_from_seed(7);
    let public_key = secret_key.to_public_key()?;
    let signature = secret_key.sign(b"message")?;

    let secret_key_bytes = secret_key.to_bytes();
    let public_key_bytes = public_key.to_bytes(format);
    let signature_bytes = signature.to_bytes(format);

    assert_eq!(
        SecretKey::from_bytes(secret_key_bytes.as_array())?.to_bytes().as_array(),
        secret_key_bytes.as_array(),
    );
    assert_eq!(PublicKey::from_bytes(&public_key_bytes)?.to_bytes(format), public_key_bytes);
    assert_eq!(Signature::from_bytes(&signature_bytes)?.to_bytes(format), signature_bytes);

    assert_eq!(SecretKey::from_hex(&secret_key.to_hex())?, secret_key);
    assert_eq!(PublicKey::from_hex(&public_key.to_hex(format))?, public_key);
    assert_eq!(Signature::from_hex(&signature.to_hex(format))?, signature);

    Ok(())
}

#[test]
fn hex_accepts_uppercase_and_missing_prefix() -> Result<()> {
    init();

    let public_key = secret_key_from_seed(3).to_public_key()?;
    let digits = public_key
        .to_hex(PointFormat::Compressed)
        .trim_start_matches("0x")
        .to_uppercase();

    assert_eq!(PublicKey::from_hex(&digits)?, public_key);
    assert_eq!(PublicKey::from_hex(&format!("0x{digits}"))?, public_key);

    assert_eq!(
        PublicKey::from_hex(&format!("0x{digits}0")).map(|_| ()),
        Err(Error::Invalid(ValidationError::InvalidHex)),
    );

    Ok(())
}

#[test]
fn decoding_checks_lengths_and_zero_points() {
    init();

    assert_eq!(
        PublicKey::from_bytes(&[0xaa; 47]).map(|_| ()),
        Err(Error::Invalid(ValidationError::InvalidLength {
            kind: bls::Kind::PublicKey,
            length: 47,
        })),
    );
    assert_eq!(
        PublicKey::from_bytes(&[0; 48]).map(|_| ()),
        Err(Error::Invalid(ValidationError::ZeroPublicKey)),
    );
    assert_eq!(
        PublicKey::from_bytes(&hex!(
            "c00000000000000000000000000000000000000000000000"
            "000000000000000000000000000000000000000000000000"
        ))
        .map(|_| ()),
        Err(Error::Invalid(ValidationError::ZeroPublicKey)),
    );
    assert_eq!(
        Signature::from_bytes(&[0; 96]).map(|_| ()),
        Err(Error::Invalid(ValidationError::ZeroSignature)),
    );
}

#[test]
fn aggregate_signature_may_be_the_identity() -> Result<()> {
    init();

    let signature = Signature::from_bytes(SignatureBytes::empty().as_bytes())?;

    assert!(signature.is_infinity());
    assert_eq!(signature.compress(), SignatureBytes::empty());
    assert!(!signature.verify(&secret_key_from_seed(1).to_public_key()?, b"message")?);

    Ok(())
}

#[test]
fn all_zero_signature_fails_verification_and_is_logged() -> Result<()> {
    init();
    testing_logger::setup();

    let public_key = secret_key_from_seed(1).to_public_key()?.compress();

    assert_eq!(functional::verify(public_key, b"message", [0_u8; 96]), Ok(false));

    testing_logger::validate(|captured_logs| {
        assert!(captured_logs.iter().any(|log| {
            log.level == Level::Debug && log.body.contains("signature is the point at infinity")
        }));
    });

    Ok(())
}

#[test]
fn functional_interface_accepts_bytes_hex_and_values() -> Result<()> {
    init();

    let secret_key = secret_key_from_seed(5);
    let secret_key_bytes = secret_key.to_bytes();

    let signature = functional::sign(secret_key_bytes.as_array(), b"message")?;
    let public_key = functional::secret_key_to_public_key(secret_key_bytes.as_array())?;

    assert_eq!(signature, secret_key.sign(b"message")?.compress());
    assert_eq!(public_key, secret_key.to_public_key()?.compress());

    let public_key_hex = format!("{public_key:?}");
    let signature_hex = format!("{signature:?}");

    assert_eq!(functional::verify(public_key, b"message", signature), Ok(true));
    assert_eq!(
        functional::verify(public_key_hex.as_str(), b"message", signature_hex.as_str()),
        Ok(true),
    );
    assert_eq!(
        functional::verify(secret_key.to_public_key()?, b"message", signature.as_bytes()),
        Ok(true),
    );
    assert_eq!(functional::verify(public_key, b"other", signature), Ok(false));
    assert_eq!(functional::verify("0xzz", b"message", signature), Ok(false));

    assert_eq!(
        functional::verify_aggregate(&[public_key], b"message", signature),
        Ok(true),
    );
    assert_eq!(
        functional::verify_multiple(&[public_key], &[b"message"], signature),
        Ok(true),
    );

    let aggregate = functional::aggregate_signatures(&[signature, signature])?;
    let aggregate_public_key = functional::aggregate_public_keys(&[public_key, public_key])?;

    assert_eq!(
        functional::verify(aggregate_public_key, b"message", aggregate),
        Ok(true),
    );

    Ok(())
}

#[test]
fn batch_verification_accepts_valid_sets_and_rejects_empty_batches() -> Result<()> {
    init();

    let sets = keypairs(3)?
        .into_iter()
        .enumerate()
        .map(|(index, (secret_key, public_key))| -> Result<_> {
            let message = format!("message {index}").into_bytes();
            let signature = secret_key.sign(&message)?;
            Ok(SignatureSet::new(message, public_key, signature))
        })
        .collect::<Result<Vec<_>>>()?;

    assert!(Signature::verify_multiple_signatures(&sets)?);

    let mut tampered = sets.clone();
    tampered[2].message = b"forged".to_vec();

    assert!(!Signature::verify_multiple_signatures(&tampered)?);

    let empty: [SignatureSet<&[u8]>; 0] = [];

    assert!(!Signature::verify_multiple_signatures(&empty)?);
    assert_eq!(
        functional::verify_multiple_signatures::<&[u8], PublicKeyBytes, SignatureBytes>(&[]),
        Ok(false),
    );

    Ok(())
}

// Signatures by sk1 and sk2 shifted by the signatures of 1 and r - 1 over an unrelated message.
// The shifts cancel out when the signatures are added, so only weighted verification notices.
#[test]
fn batch_verification_rejects_rogue_signatures() -> Result<()> {
    init();

    let one = SecretKey::from_bytes(&hex!(
        "0000000000000000000000000000000000000000000000000000000000000001"
    ))?;
    let order_minus_one = SecretKey::from_bytes(&hex!(
        "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000000"
    ))?;

    let delta = one.sign(b"unrelated")?;
    let negated_delta = order_minus_one.sign(b"unrelated")?;

    assert!(Signature::aggregate(&[delta, negated_delta])?.is_infinity());

    let [(secret_key_1, public_key_1), (secret_key_2, public_key_2)] =
        <[_; 2]>::try_from(keypairs(2)?).map_err(|_| anyhow::anyhow!("expected 2 keypairs"))?;

    let rogue_1 = Signature::aggregate(&[secret_key_1.sign(b"first")?, delta])?;
    let rogue_2 = Signature::aggregate(&[secret_key_2.sign(b"second")?, negated_delta])?;

    assert!(!rogue_1.verify(&public_key_1, b"first")?);
    assert!(!rogue_2.verify(&public_key_2, b"second")?);

    assert!(Signature::aggregate(&[rogue_1, rogue_2])?
        .verify_multiple(&[public_key_1, public_key_2], &[b"first".as_slice(), b"second"])?);

    assert!(!Signature::verify_multiple_signatures(&[
        SignatureSet::new(b"first".as_slice(), public_key_1, rogue_1),
        SignatureSet::new(b"second".as_slice(), public_key_2, rogue_2),
    ])?);

    Ok(())
}

static MALICIOUS_PUBLIC_KEYS: [[u8; 48]; 4] = [
    hex!("b836ccf44fa01e46745ccc3a47855e959783ef5df5cdcc607354b98d52c16b6613761339bfb833fd525cdca7c8071c6b"),
    hex!("a317ce36dcf2bf6fd262dbad80427f890bc166152682cb6c600a66eb7d525f200839ab798ca4877c3143a31201905de4"),
    hex!("b9b7b4f4a88d98f34b4c9ba8ae10e935ba51164ddc045d6ae26b403c87a6934e6c75f9fb5cc4b3b29a1255b316d08de5"),
    hex!("a386a2bc7e9d13cf9b4ad3c819547534c768aeae6a2414bfcebee50f38aaf85a9d610974db931278c08fe86a91eb2999"),
];

static MALICIOUS_MESSAGES: [[u8; 32]; 4] = [
    hex!("690a91fc0a7a49bbc5afe9516c1831ca8845f281ef2e414f7dfeb71b5e91a902"),
    hex!("3829d4fc2332afc2634079823b89598f3674be5da324b1092b3d8aeb7af5e164"),
    hex!("9a9406647ed6af16b5ce3e828c5f5ef35f1221ed10476209476c12776ce417ac"),
    hex!("3e8e4bcb78fda59a43ebfb90970cc6036ce18dc3d3a1b714cc4c1bfc00b8258e"),
];

// The last 2 signatures are shifted by a random point in opposite directions.
static MALICIOUS_SIGNATURES: [[u8; 96]; 4] = [
    hex!(
        "864ed65f224cf4e49e9bbf313d3dc243649885d9bd432a15e6c1259f2e4c29fcefa7a4c3aafaac01519f7c92239702d7"
        "096df2971b1801cd26d0ca0d5e7743ccb0abe79d8c383f9bb04ebe553a3094e84d55bc79be7eff5ffdb9b322205acfd1"
    ),
    hex!(
        "90efd8c82c356956fc170bec2aed874d14cea079625dfe69d8bc375e10fcd96e2c0348dfeb713f1889629ccb9ec95fee"
        "0e0c9cc7a728d8a7068701a04192ed585ec761edf6e2c1e44ceaaa61732052af81a6033fa7d375d7f7157909549322da"
    ),
    hex!(
        "9023f43cc8e05a3e842b242b9f6781a9e2eadbfcbebd1242563e56bb47cd273ef20fc0c5099e05e83093581907bfd029"
        "15b5ef8c553918d4524c274a8856950c87c6314a2c003a2ed28e5fb56ddfdb233a2b895c2397bd15629325d95ca43b83"
    ),
    hex!(
        "82c8fedc6ad43e945bbf7529d55b73d7ce593bc9ea94dfaf91d720b2ab0e51ce551f7fcda96d428b627ff776c94d6f36"
        "0af425fe7fb4e4469b893071149db747f27a8bd488af7ba7f0edf86c7e551af89d7a55d4fc86968e10f91ed76e68e373"
    ),
];

#[test]
fn batch_verification_rejects_shifted_signatures() -> Result<()> {
    init();

    let manipulated = [false, false, true, true];

    for ((public_key, message), (signature, manipulated)) in MALICIOUS_PUBLIC_KEYS
        .iter()
        .zip(MALICIOUS_MESSAGES)
        .zip(MALICIOUS_SIGNATURES.iter().zip(manipulated))
    {
        assert_eq!(functional::verify(public_key, message, signature), Ok(!manipulated));
    }

    let aggregate = functional::aggregate_signatures(&MALICIOUS_SIGNATURES)?;

    assert_eq!(
        functional::verify_multiple(&MALICIOUS_PUBLIC_KEYS, &MALICIOUS_MESSAGES, aggregate),
        Ok(true),
    );

    let sets = MALICIOUS_PUBLIC_KEYS
        .iter()
        .zip(MALICIOUS_MESSAGES)
        .zip(&MALICIOUS_SIGNATURES)
        .map(|((public_key, message), signature)| {
            SignatureSetArgs::new(message, public_key, signature)
        })
        .collect_vec();

    assert_eq!(functional::verify_multiple_signatures(&sets), Ok(false));

    Ok(())
}

#[test]
fn unvalidated_decoding_keeps_coordinates_hint_out_of_output() -> Result<()> {
    init();

    let signature = secret_key_from_seed(9).sign(b"message")?;
    let bytes = signature.compress();

    let decoded = Signature::from_bytes_with(bytes.as_bytes(), CoordType::Jacobian, false)?;

    assert_eq!(decoded.compress(), bytes);
    assert!(decoded.verify(&secret_key_from_seed(9).to_public_key()?, b"message")?);

    Ok(())
}

#[tokio::test]
async fn async_verification_matches_blocking_verification() -> Result<()> {
    init();

    let secret_key = secret_key_from_seed(11);
    let public_key = secret_key.to_public_key()?;
    let signature = secret_key.sign(b"message")?;

    assert!(functional::async_verify(public_key.compress(), b"message".to_vec(), signature).await?);
    assert!(!functional::async_verify(public_key, b"other".to_vec(), signature).await?);

    assert!(
        functional::async_verify_aggregate(vec![public_key], b"message", signature.compress())
            .await?
    );
    assert!(
        functional::async_verify_multiple(vec![public_key], vec![b"message"], signature).await?
    );

    let sets = vec![SignatureSet::new(b"message".to_vec(), public_key, signature)];

    assert!(Signature::async_verify_multiple_signatures(sets).await?);

    let sets = vec![SignatureSetArgs::new(b"other", public_key, signature)];

    assert!(!functional::async_verify_multiple_signatures(sets).await?);

    Ok(())
}
