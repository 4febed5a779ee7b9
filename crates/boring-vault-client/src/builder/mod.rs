use std::collections::{hash_map::Entry, HashMap, HashSet};

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use eyre::{eyre, Result};
use solana_sdk::{
    message::{Message, VersionedMessage},
    signature::{Keypair, Signer},
    transaction::VersionedTransaction,
};

use crate::{
    components::digest_to_hex,
    config::{KaminoConfig, VaultConfig},
    instructions::{create_initialize_cpi_digest_instruction, create_manage_instruction},
    manage::ExternalInstruction,
    transport::Transport,
    utils::{get_cpi_digest_pda, BoringVaultError, MaybeSigner, MAX_TRANSACTION_SIZE},
    view,
};

pub mod boring_vault;
pub mod jito;
pub mod kamino;
pub mod system;

/// Collects instructions and the keypairs that sign them, then submits
/// everything as one transaction.
pub struct Builder<T: Transport> {
    pub transport: T,
    pub instructions: Vec<Instruction>,
    pub signers: HashMap<Pubkey, Keypair>,
    pub kamino_config: Option<KaminoConfig>,
    pub vault_config: Option<VaultConfig>,
    // Deploys queued but not yet landed; the next one gets vault_count + this.
    pending_deploys: u64,
    // Digest accounts already initialized by a queued instruction.
    pending_digests: HashSet<Pubkey>,
}

impl<T: Transport> Builder<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            instructions: vec![],
            signers: HashMap::new(),
            kamino_config: None,
            vault_config: None,
            pending_deploys: 0,
            pending_digests: HashSet::new(),
        }
    }

    pub fn with_kamino_config(mut self, kamino_config: Option<KaminoConfig>) -> Self {
        self.kamino_config = kamino_config;
        self
    }

    pub fn with_vault_config(mut self, vault_config: Option<VaultConfig>) -> Self {
        self.vault_config = vault_config;
        self
    }

    pub fn clear(&mut self) {
        self.instructions.clear();
        self.signers.clear();
        self.pending_deploys = 0;
        self.pending_digests.clear();
    }

    /// Records the keypair behind `signer`. Bare public keys are ignored; the
    /// transaction then has to be signed elsewhere.
    pub fn add_signer(&mut self, signer: MaybeSigner) {
        let pubkey = signer.pubkey();
        if let (Entry::Vacant(entry), Some(keypair)) =
            (self.signers.entry(pubkey), signer.into_keypair())
        {
            entry.insert(keypair);
        }
    }

    pub(crate) fn add_signers(&mut self, signer: MaybeSigner, authority: Option<MaybeSigner>) {
        self.add_signer(signer);
        if let Some(authority) = authority {
            self.add_signer(authority);
        }
    }

    pub(crate) fn kamino(&self) -> Result<&KaminoConfig> {
        self.kamino_config
            .as_ref()
            .ok_or_else(|| eyre!("No Kamino config loaded"))
    }

    /// Id the next `deploy` on this builder will receive.
    pub fn next_vault_id(&self) -> Result<u64> {
        let vault_count = view::next_vault_id(&self.transport)?;
        vault_count
            .checked_add(self.pending_deploys)
            .ok_or_else(|| eyre!(BoringVaultError::Overflow))
    }

    /// Compiles the pending instructions into a legacy-message transaction
    /// paid by `payer` and signed by exactly the keys the message requires.
    pub fn compile(&self, payer: &Pubkey) -> Result<VersionedTransaction> {
        if self.instructions.is_empty() {
            return Err(eyre!(BoringVaultError::EmptyBundle));
        }

        let blockhash = self.transport.get_latest_blockhash()?;
        let message = Message::new_with_blockhash(&self.instructions, Some(payer), &blockhash);

        let required = &message.account_keys[..message.header.num_required_signatures as usize];
        let signers = required
            .iter()
            .map(|key| {
                self.signers
                    .get(key)
                    .ok_or_else(|| eyre!("Missing keypair for required signer {}", key))
            })
            .collect::<Result<Vec<&Keypair>>>()?;

        let transaction = VersionedTransaction::try_new(VersionedMessage::Legacy(message), &signers)?;

        let size = bincode::serialized_size(&transaction)? as usize;
        if size > MAX_TRANSACTION_SIZE {
            return Err(eyre!(
                "{} ({} bytes, limit {})",
                BoringVaultError::TransactionTooLarge,
                size,
                MAX_TRANSACTION_SIZE
            ));
        }

        Ok(transaction)
    }

    /// Base64 of the bincode-serialized transaction, for external submission.
    pub fn compile_b64(&self, payer: &Pubkey) -> Result<String> {
        let transaction = self.compile(payer)?;
        Ok(STANDARD.encode(bincode::serialize(&transaction)?))
    }

    /// Signs with `payer` and every recorded keypair, sends, waits for
    /// confirmation and clears the builder. On failure the pending
    /// instructions are kept.
    pub fn try_bundle_all(&mut self, payer: Keypair) -> Result<String> {
        let payer_pubkey = payer.pubkey();
        self.add_signer(MaybeSigner::Keypair(payer));

        let transaction = self.compile(&payer_pubkey)?;

        msg!(
            "Bundle {{payer: {}, instructions: {}}}",
            payer_pubkey,
            self.instructions.len()
        );

        let signature = self.transport.send_and_confirm(&transaction)?;
        self.clear();

        Ok(signature.to_string())
    }

    /// Runs `queue` and, if it fails, drops whatever it queued so the builder
    /// is left as it was.
    pub(crate) fn all_or_nothing<F>(&mut self, queue: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let queued = self.instructions.len();
        let pending_digests = self.pending_digests.clone();

        let result = queue(self);
        if result.is_err() {
            self.instructions.truncate(queued);
            self.pending_digests = pending_digests;
        }
        result
    }

    /// Queues `eix` through `manage`, first whitelisting its digest when the
    /// digest account is missing and `authority` can sign for it. A digest is
    /// whitelisted at most once per bundle.
    pub(crate) fn push_manage<E: ExternalInstruction>(
        &mut self,
        signer: &MaybeSigner,
        authority: Option<&MaybeSigner>,
        eix: &E,
    ) -> Result<()> {
        let signer_keypair = signer
            .as_keypair()
            .ok_or_else(|| eyre!(BoringVaultError::SignerNotKeypair))?;

        let digest = view::view_cpi_digest(&self.transport, signer_keypair, eix)?;
        let cpi_digest = get_cpi_digest_pda(eix.vault_id(), &digest);

        if !self.pending_digests.contains(&cpi_digest)
            && !self.transport.account_exists(&cpi_digest)?
        {
            let authority = authority
                .and_then(MaybeSigner::as_keypair)
                .ok_or_else(|| {
                    eyre!(
                        "CPI digest {} is not initialized for vault {} and no authority keypair was given",
                        digest_to_hex(&digest),
                        eix.vault_id()
                    )
                })?;

            msg!(
                "InitializeCpiDigest {{vault_id: {}, digest: {}}}",
                eix.vault_id(),
                digest_to_hex(&digest)
            );

            self.instructions.push(create_initialize_cpi_digest_instruction(
                &authority.pubkey(),
                eix.vault_id(),
                digest,
                eix.ix_operators(),
            ));
            self.pending_digests.insert(cpi_digest);
        }

        self.instructions
            .push(create_manage_instruction(&signer.pubkey(), eix, &cpi_digest));

        Ok(())
    }
}
