use crate::model::errors::SignatureError;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

pub fn parse_public_key(public_key_hex: &str) -> Result<VerifyingKey, SignatureError> {
    let bytes = hex::decode(public_key_hex.trim())
        .map_err(|e| SignatureError::InvalidPublicKey(e.to_string()))?;
    let bytes: [u8; 32] = bytes
        .try_into()
        .map_err(|_| SignatureError::InvalidPublicKey("expected 32 bytes".to_string()))?;
    VerifyingKey::from_bytes(&bytes).map_err(|e| SignatureError::InvalidPublicKey(e.to_string()))
}

/// Checks the Ed25519 signature the platform computes over `timestamp || body`.
pub fn verify(
    key: &VerifyingKey,
    timestamp: &str,
    body: &[u8],
    signature_hex: &str,
) -> Result<(), SignatureError> {
    let signature_bytes =
        hex::decode(signature_hex).map_err(|_| SignatureError::MalformedSignature)?;
    let signature =
        Signature::from_slice(&signature_bytes).map_err(|_| SignatureError::MalformedSignature)?;

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    key.verify(&message, &signature)
        .map_err(|_| SignatureError::BadSignature)
}
