use anchor_lang::prelude::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

/// A transaction participant that may or may not be able to sign locally.
///
/// Builder calls accept either form: a bare public key lets a transaction be
/// assembled for an external wallet, a keypair lets the builder sign it.
pub enum MaybeSigner {
    Keypair(Keypair),
    Pubkey(Pubkey),
}

impl MaybeSigner {
    pub fn pubkey(&self) -> Pubkey {
        match self {
            Self::Keypair(keypair) => keypair.pubkey(),
            Self::Pubkey(pubkey) => *pubkey,
        }
    }

    pub fn can_sign(&self) -> bool {
        matches!(self, Self::Keypair(_))
    }

    pub fn as_keypair(&self) -> Option<&Keypair> {
        match self {
            Self::Keypair(keypair) => Some(keypair),
            Self::Pubkey(_) => None,
        }
    }

    pub fn into_keypair(self) -> Option<Keypair> {
        match self {
            Self::Keypair(keypair) => Some(keypair),
            Self::Pubkey(_) => None,
        }
    }
}

impl From<Keypair> for MaybeSigner {
    fn from(keypair: Keypair) -> Self {
        Self::Keypair(keypair)
    }
}

impl From<Pubkey> for MaybeSigner {
    fn from(pubkey: Pubkey) -> Self {
        Self::Pubkey(pubkey)
    }
}

impl Clone for MaybeSigner {
    fn clone(&self) -> Self {
        match self {
            Self::Keypair(keypair) => Self::Keypair(keypair.insecure_clone()),
            Self::Pubkey(pubkey) => Self::Pubkey(*pubkey),
        }
    }
}
