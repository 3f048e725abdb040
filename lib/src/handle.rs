// Copyright (c) 2024-2025 The OrbitX Developers

//! [BridgeHandle] for provider-to-shell bridge flows

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};

use orbitx_bridge_deeplink::{
    chain::ChainFamily,
    encode,
    message::WalletMessage,
    payload::{HandoffPayload, WalletSet},
    results::{
        SignMessageResult, Status, TransactionResult, TronSignMessageResult,
        TronSignTransactionResult,
    },
};

use crate::{
    chains,
    ensure::{ensure_wallets, WalletSnapshot},
    error::Error,
    host::Host,
    provider::{Identity, TransactionRequest, WalletProvider},
    sender,
};

/// Bridge between a wallet provider and the hosting shell.
///
/// Owns one provider binding and one host binding. Flows run the
/// provider call first, then deliver the outcome over the host
/// channels; result delivery is always attempted, success or not,
/// so the native side never waits on a flow that already died.
pub struct BridgeHandle<P: WalletProvider, H: Host> {
    provider: P,
    host: H,
    notified: AtomicBool,
}

impl<P: WalletProvider, H: Host> BridgeHandle<P, H> {
    /// Create a bridge over a provider and a host
    pub fn new(provider: P, host: H) -> Self {
        Self {
            provider,
            host,
            notified: AtomicBool::new(false),
        }
    }

    /// Provider binding
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Host binding
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Ensure wallets for every chain family and deliver the hand-off
    /// payload over every channel.
    ///
    /// The payload ships at most once per session, re-invocations
    /// re-check provisioning but skip delivery. Delivery is
    /// fire-and-forget: channel failures are logged, never returned.
    pub async fn ensure_and_notify(&self) -> Result<WalletSet, Error> {
        let identity = self
            .provider
            .identity()
            .await?
            .ok_or(Error::NotAuthenticated)?;

        info!("ensuring wallets for {}", identity.user_id);

        let snapshot = WalletSnapshot::load(&self.provider, &identity).await?;
        let wallets = ensure_wallets(&self.provider, &snapshot).await?;

        if self.notified.swap(true, Ordering::SeqCst) {
            debug!("payload already delivered this session");
        } else {
            let payload = HandoffPayload::new(identity.user_id, wallets.clone());
            sender::send(&self.host, &encode::representations(&payload));
        }

        Ok(wallets)
    }

    /// Authenticate with a passkey
    pub async fn login(&self) -> Result<Identity, Error> {
        self.provider.login().await.map_err(Error::from)
    }

    /// Register a new passkey account
    pub async fn signup(&self) -> Result<Identity, Error> {
        self.provider.signup().await.map_err(Error::from)
    }

    /// End the provider session, re-arming hand-off delivery
    pub async fn logout(&self) -> Result<(), Error> {
        self.provider.logout().await?;
        self.notified.store(false, Ordering::SeqCst);
        Ok(())
    }

    /// Sign a message and report the outcome to the shell.
    ///
    /// Returns the signature; a provider failure is reported to the
    /// shell as a failed result first and then returned.
    pub async fn sign_message_and_report(
        &self,
        chain: ChainFamily,
        address: &str,
        message: &str,
        chain_id: Option<&str>,
    ) -> Result<String, Error> {
        let res = self.provider.sign_message(chain, address, message).await;

        let (signature, status) = match &res {
            Ok(s) => (s.clone(), Status::Success),
            Err(_) => (String::new(), Status::Failed),
        };
        self.report_sign_message(chain, signature, status, message, chain_id);

        res.map_err(Error::from)
    }

    /// Report a user-dismissed message-signing flow
    pub fn report_sign_cancelled(&self, chain: ChainFamily, message: &str, chain_id: Option<&str>) {
        self.report_sign_message(chain, String::new(), Status::Cancelled, message, chain_id);
    }

    fn report_sign_message(
        &self,
        chain: ChainFamily,
        signature: String,
        status: Status,
        message: &str,
        chain_id: Option<&str>,
    ) {
        let (url, envelope) = match chain {
            ChainFamily::Tron => {
                let result = TronSignMessageResult {
                    signature,
                    status,
                    message: message.to_string(),
                };
                (result.url(), WalletMessage::from(&result))
            }
            ChainFamily::Evm => {
                let result = SignMessageResult { signature, status };
                let envelope = WalletMessage::EvmSignMessageResult {
                    signature: result.signature.clone(),
                    status,
                    message: message.to_string(),
                    chain_id: chain_id.unwrap_or_default().to_string(),
                };
                (result.url(), envelope)
            }
            ChainFamily::Solana => {
                let result = SignMessageResult { signature, status };
                let envelope = WalletMessage::SolanaSignMessageResult {
                    signature: result.signature.clone(),
                    status,
                    message: message.to_string(),
                    chain_id: chain_id.unwrap_or_default().to_string(),
                };
                (result.url(), envelope)
            }
        };

        self.report(&url, &envelope);
    }

    /// Sign and submit a transaction, reporting the outcome to the
    /// shell
    pub async fn send_transaction_and_report(
        &self,
        chain: ChainFamily,
        address: &str,
        req: &TransactionRequest,
    ) -> Result<String, Error> {
        let res = self.provider.send_transaction(chain, address, req).await;

        let mut result = match &res {
            Ok(hash) => TransactionResult::success(hash),
            Err(_) => TransactionResult::failed(),
        };
        match chain {
            ChainFamily::Evm if !req.chain_id.is_empty() => {
                result = result
                    .with_chain_id(&req.chain_id)
                    .with_network(chains::chain_name(&req.chain_id));
            }
            ChainFamily::Solana if !req.cluster.is_empty() => {
                result = result.with_network(&req.cluster);
            }
            _ => (),
        }

        self.report(&result.url(), &WalletMessage::from(&result));

        res.map_err(Error::from)
    }

    /// Report a user-dismissed transaction flow
    pub fn report_transaction_cancelled(&self, chain_id: Option<&str>) {
        let mut result = TransactionResult::cancelled();
        if let Some(id) = chain_id {
            result = result.with_chain_id(id).with_network(chains::chain_name(id));
        }
        self.report(&result.url(), &WalletMessage::from(&result));
    }

    /// Sign a Tron transaction hash and report the outcome.
    ///
    /// The chain interaction itself (building the transaction,
    /// broadcasting) happens outside the provider; this flow only
    /// covers the signature and the report back to the shell.
    pub async fn tron_sign_transaction_and_report(
        &self,
        address: &str,
        raw_hash: &str,
        txid: Option<&str>,
        amount: &str,
        to_address: &str,
    ) -> Result<String, Error> {
        let res = self
            .provider
            .sign_raw_hash(ChainFamily::Tron, address, raw_hash)
            .await;

        let result = match &res {
            Ok(signature) => TronSignTransactionResult {
                signature: signature.clone(),
                status: Status::Success,
                transaction_hash: txid.map(str::to_string),
                amount: amount.to_string(),
                to_address: to_address.to_string(),
            },
            Err(_) => TronSignTransactionResult {
                signature: String::new(),
                status: Status::Failed,
                transaction_hash: None,
                amount: amount.to_string(),
                to_address: to_address.to_string(),
            },
        };
        self.report(&result.url(), &WalletMessage::from(&result));

        res.map_err(Error::from)
    }

    /// Start the provider's key export flow for a wallet
    pub async fn export_wallet(&self, chain: ChainFamily, address: &str) -> Result<(), Error> {
        self.provider
            .export_wallet(chain, address)
            .await
            .map_err(Error::from)
    }

    /// Deliver a result link over the message channel and navigation
    fn report(&self, url: &str, envelope: &WalletMessage) {
        if self.host.message_channel_available() {
            if let Err(e) = self.host.post_message(envelope) {
                warn!("result message failed: {e}");
            }
        }
        if let Err(e) = self.host.navigate(url) {
            warn!("result navigation failed: {e}");
        }
    }
}
